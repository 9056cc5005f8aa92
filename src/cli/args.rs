use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Class name
    pub class: String,

    /// Minor assessment grades (comma-separated)
    #[arg(long, default_value = "")]
    pub minor: String,

    /// Major assessment grades (comma-separated)
    #[arg(long, default_value = "")]
    pub major: String,

    /// Weight for minor assessments (percentage, 0-100); the major weight
    /// is derived as the remainder
    #[arg(long)]
    pub minor_weight: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Class name (case-sensitive)
    pub class: String,

    /// New minor assessment grades (comma-separated)
    #[arg(long, default_value = "")]
    pub minor: String,

    /// New major assessment grades (comma-separated)
    #[arg(long, default_value = "")]
    pub major: String,
}
