use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use mcu_dashboard_common::{FormTab, ParticipantKind, ResultFilter, SortKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcu")]
#[command(about = "MCU participant dashboard: list, upload, verify and edit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log format (pretty/json); overrides the config file
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the participant list (Daftar Peserta MCU)
    List {
        /// Tab (individual/corporate); config default when omitted
        #[arg(short, long)]
        tab: Option<ParticipantKind>,

        /// Result filter (Normal/Abnormal/Atensi/Kritis/all)
        #[arg(short, long)]
        result: Option<ResultFilter>,

        /// Search name, MCU number or user id
        #[arg(short, long)]
        search: Option<String>,

        /// Sort column (date/name/company/mcu-no/result)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Upload an Excel file and verify the resulting batch
    Upload {
        /// Spreadsheet (.xls/.xlsx); only the name is checked
        #[arg(required = true)]
        file: PathBuf,

        /// Participant type of the batch (individual/corporate)
        #[arg(long = "type", value_name = "TYPE")]
        kind: ParticipantKind,

        /// Process the batch without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the new submissions queue (Pengajuan Baru)
    Submissions {
        /// Tab (individual/corporate)
        #[arg(short, long, default_value = "individual")]
        tab: ParticipantKind,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show a participant's examination form
    Form {
        /// Participant id, e.g. ind-3 or corp-12
        #[arg(required = true)]
        id: String,

        /// Form tab (participant/summary/physical/lab/...); all tabs when omitted
        #[arg(short, long)]
        tab: Option<FormTab>,

        /// Batch type for new-N ids (individual/corporate)
        #[arg(long = "type", value_name = "TYPE", default_value = "individual")]
        kind: ParticipantKind,

        /// Print the form layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive dashboard session
    Session,

    /// Show or edit settings
    Config {
        /// Show the settings
        #[arg(long)]
        show: bool,

        /// Default list tab (individual/corporate)
        #[arg(long)]
        set_default_tab: Option<ParticipantKind>,

        /// Default result filter
        #[arg(long)]
        set_default_result: Option<ResultFilter>,

        /// Log format (pretty/json)
        #[arg(long)]
        set_log_format: Option<LogFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcu_dashboard_common::InspectionResult;

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from([
            "mcu", "list", "--tab", "corporate", "--result", "Atensi", "--sort", "mcu-no",
            "--desc", "-p", "2",
        ])
        .expect("parse failed");
        match cli.command {
            Commands::List {
                tab,
                result,
                sort,
                desc,
                page,
                ..
            } => {
                assert_eq!(tab, Some(ParticipantKind::Corporate));
                assert_eq!(result, Some(ResultFilter::Only(InspectionResult::Atensi)));
                assert_eq!(sort, Some(SortKey::McuNo));
                assert!(desc);
                assert_eq!(page, 2);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["mcu", "list", "--desc"]).is_err());
    }

    #[test]
    fn test_parse_upload_and_verbosity() {
        let cli = Cli::try_parse_from(["mcu", "-vv", "upload", "data.xlsx", "--type", "corp", "-y"])
            .expect("parse failed");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Upload { file, kind, yes } => {
                assert_eq!(file, PathBuf::from("data.xlsx"));
                assert_eq!(kind, ParticipantKind::Corporate);
                assert!(yes);
            }
            _ => panic!("expected upload"),
        }
    }

    #[test]
    fn test_parse_form_tab() {
        let cli = Cli::try_parse_from(["mcu", "form", "ind-1", "--tab", "lab"]).expect("parse failed");
        match cli.command {
            Commands::Form { id, tab, kind, json } => {
                assert_eq!(id, "ind-1");
                assert_eq!(tab, Some(FormTab::Laboratory));
                assert_eq!(kind, ParticipantKind::Individual);
                assert!(!json);
            }
            _ => panic!("expected form"),
        }
    }

    #[test]
    fn test_parse_form_batch_type() {
        let cli = Cli::try_parse_from(["mcu", "form", "new-2", "--type", "corp", "--json"])
            .expect("parse failed");
        match cli.command {
            Commands::Form { kind, json, .. } => {
                assert_eq!(kind, ParticipantKind::Corporate);
                assert!(json);
            }
            _ => panic!("expected form"),
        }
    }
}
