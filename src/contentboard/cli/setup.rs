use clap::{ArgAction, Args, Parser, Subcommand};
use contentboard::draft::RecordDraft;
use contentboard::filter::{ViewFilter, VisibilityFilter};
use contentboard::model::ContentType;

#[derive(Parser, Debug)]
#[command(name = "contentboard", bin_name = "contentboard", version)]
#[command(about = "Manage a board of publishable content records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global board instead of ./.contentboard
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Log more (-v warnings, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally filtered (default command)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show records in full
    #[command(alias = "view")]
    Show {
        /// Record ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Add a new record at the top of the board
    #[command(alias = "new")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a record's fields
    Edit {
        /// Record id
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Flip a record between visible and hidden
    Toggle {
        /// Record id
        id: String,
    },

    /// Drop a record onto another record's slot in the (filtered) view
    #[command(alias = "mv")]
    Move {
        /// Id of the record being dragged
        source: String,

        /// Id of the record it is dropped onto
        target: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Delete a record after confirmation
    #[command(alias = "rm")]
    Delete {
        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, merge-strategy, clear-new-on-save)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Create the board directory and seed it
    Init,
}

/// View filter flags. No flags means no filter.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only records of this content type (e.g. blog-post)
    #[arg(long = "type", value_name = "TYPE")]
    pub content_type: Option<ContentType>,

    /// Only visible or only hidden records
    #[arg(long, value_name = "visible|hidden")]
    pub visibility: Option<VisibilityFilter>,

    /// Only records with a tag containing this text (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ViewFilter {
        ViewFilter {
            content_type: self.content_type,
            visibility: self.visibility,
            tag: self.tag.clone(),
        }
    }
}

/// Editable record fields. Text fields accept "" to clear them.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// Reference id
    #[arg(long = "ref", value_name = "REF")]
    pub reference_id: Option<String>,

    /// Content type (e.g. blog-post, forum-thread)
    #[arg(long = "type", value_name = "TYPE")]
    pub content_type: Option<ContentType>,

    #[arg(long, value_name = "visible|hidden")]
    pub visibility: Option<VisibilityFilter>,

    /// Start publish date
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// End publish date
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Comma separated tags
    #[arg(long)]
    pub tags: Option<String>,

    #[arg(long)]
    pub priority: Option<u32>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.reference_id.is_none()
            && self.content_type.is_none()
            && self.visibility.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.tags.is_none()
            && self.priority.is_none()
    }

    /// Overwrites the draft fields that were given on the command line.
    pub fn apply_to(&self, draft: &mut RecordDraft) {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(reference_id) = &self.reference_id {
            draft.reference_id = reference_id.clone();
        }
        if let Some(content_type) = self.content_type {
            draft.content_type = content_type;
        }
        if let Some(visibility) = self.visibility {
            draft.visibility = visibility == VisibilityFilter::Visible;
        }
        if let Some(start) = &self.start {
            draft.start_publish_date = start.clone();
        }
        if let Some(end) = &self.end {
            draft.end_publish_date = end.clone();
        }
        if let Some(tags) = &self.tags {
            draft.tags = tags.clone();
        }
        if let Some(priority) = self.priority {
            draft.priority = Some(priority);
        }
    }
}
