use clap::{Arg, ArgAction, Command, arg};

pub const ANNOTATE_CMD: &str = "annotate";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .about("Find the genes near each GWAS SNP and write variant- and gene-centric tables.")
        .arg(arg!(--genes <JSON> "Genome annotation JSON file").required(true))
        .arg(
            Arg::new("snps")
                .long("snps")
                .required(true)
                .action(ArgAction::Append)
                .help("Association study JSON file (repeat for multiple independent runs)"),
        )
        .arg(
            arg!(--distance <BP> "Distance threshold in base pairs (e.g. 10000)")
                .required(false)
                .default_value("5000"),
        )
        .arg(
            arg!(--pvalue <PVALUE> "P-value threshold (e.g. 1e-5); 1.0 disables filtering")
                .required(false)
                .default_value("1.0"),
        )
        .arg(
            Arg::new("output-prefix")
                .long("output-prefix")
                .required(false)
                .default_value("snp2gene")
                .help("Prefix for output file names"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .required(false)
                .default_value(".")
                .help("Directory for output files"),
        )
        .arg(
            Arg::new("save-gene-function")
                .long("save-gene-function")
                .action(ArgAction::SetTrue)
                .help("Also write the whole-genome gene function table"),
        )
}
