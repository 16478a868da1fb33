use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Package kind accepted by the `type` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageKind {
    Collection,
    Repository,
}

impl PackageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKind::Collection => "collection",
            PackageKind::Repository => "repository",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an author's packages
    Show {
        namespace: String,

        /// Filter by name; whitespace separated words must all match
        #[arg(short, long)]
        name: Option<String>,

        /// Only list one kind of package
        #[arg(short = 't', long = "type")]
        kind: Option<PackageKind>,

        /// Sort field: name or download_count
        #[arg(short, long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        #[arg(short, long)]
        page: Option<u32>,

        #[arg(long)]
        page_size: Option<u32>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Follow the author, or unfollow if already followed
    Follow { namespace: String },

    /// Print the detail page path of one of the author's packages
    Open { namespace: String, item: String },
}
