use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use listhealth_core::{
    classify, ActivityWindow, Bucket, BucketCounts, Contact, ContactFilter, SessionOverrides,
    TagFilter, REENGAGEMENT_COOLDOWN_DAYS,
};
use listhealth_export::{
    build_export_rows, category_counts, select_for_export, to_csv_string, CategoryKind,
    ExportCategory, EXPORT_OPTIONS,
};
use listhealth_ingest::load_contacts;
use std::fs;
use std::path::{Path, PathBuf};

mod sample;

#[derive(Parser, Debug)]
#[command(name = "listhealth", version, about = "Contact list deliverability health CLI")]
struct Cli {
    /// Contact list file (.json or .csv); defaults to the built-in sample list
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) used as "today" (default: current date)
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Health tile counts: contacts per bucket
    Tiles,

    /// List contacts with their computed bucket
    List {
        /// Exact raw-status filter (e.g. UNENGAGED)
        #[arg(long)]
        status: Option<String>,

        /// Case-insensitive search over name and email
        #[arg(long)]
        search: Option<String>,

        /// Keep contacts carrying at least one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Keep only untagged contacts
        #[arg(long, conflicts_with = "tag")]
        untagged: bool,

        /// Keep contacts with activity in the last N days
        #[arg(long)]
        active_within: Option<i64>,

        /// Keep contacts classified into this bucket (e.g. UNENGAGED)
        #[arg(long)]
        bucket: Option<String>,

        /// Contact ids to treat as operator-disabled for this run (repeatable)
        #[arg(long)]
        disable: Vec<String>,
    },

    /// Unengaged contacts and their re-engagement eligibility
    Reengage,

    /// Export selected categories to CSV
    Export {
        /// Category value: a bucket (ACTIVE, PENDING_VETTING, UNENGAGED,
        /// SUNSET, SUPPRESSED) or a raw status; repeatable
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Output path (default: contact_export_YYYYMMDD.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print per-category match counts instead of writing a file
        #[arg(long)]
        counts: bool,

        /// List the selectable category values and exit
        #[arg(long)]
        options: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let reference = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let contacts = load_input(cli.input.as_deref())?;

    match cli.command {
        Command::Tiles => tiles(&contacts, reference),
        Command::List {
            status,
            search,
            tag,
            untagged,
            active_within,
            bucket,
            disable,
        } => list(
            &contacts,
            reference,
            status,
            search,
            tag,
            untagged,
            active_within,
            bucket,
            disable,
        )?,
        Command::Reengage => reengage(&contacts, reference),
        Command::Export {
            categories,
            out,
            counts,
            options,
        } => export(&contacts, reference, categories, out, counts, options)?,
    }

    Ok(())
}

fn load_input(path: Option<&Path>) -> Result<Vec<Contact>> {
    let Some(path) = path else {
        return Ok(sample::sample_contacts());
    };
    if !path.exists() {
        bail!("contact list not found: {} (pass --input <path>)", path.display());
    }
    load_contacts(path)
}

fn tiles(contacts: &[Contact], reference: NaiveDate) {
    let counts = BucketCounts::tally(contacts, reference);
    println!("Contact health as of {reference}\n");
    for bucket in Bucket::ALL {
        println!("{:<14}{:>5}", bucket.label(), counts.get(bucket));
    }
    println!("{:<14}{:>5}", "Total", counts.total());
}

#[allow(clippy::too_many_arguments)]
fn list(
    contacts: &[Contact],
    reference: NaiveDate,
    status: Option<String>,
    search: Option<String>,
    tags: Vec<String>,
    untagged: bool,
    active_within: Option<i64>,
    bucket: Option<String>,
    disable: Vec<String>,
) -> Result<()> {
    let mut overrides = SessionOverrides::new();
    for id in disable {
        overrides.disable(id);
    }
    let effective = overrides.apply(contacts);

    let filter = ContactFilter {
        status,
        search,
        tags: if untagged {
            TagFilter::Untagged
        } else if tags.is_empty() {
            TagFilter::Any
        } else {
            TagFilter::Specific(tags)
        },
        activity: match active_within {
            Some(days) => ActivityWindow::WithinDays(days),
            None => ActivityWindow::Any,
        },
    };

    let bucket_key = bucket.map(|b| b.to_uppercase());
    if let Some(key) = &bucket_key {
        if !Bucket::ALL.iter().any(|b| b.as_str() == key) {
            bail!("unknown bucket: {key} (expected one of ACTIVE, UNENGAGED, IN_VETTING, SUPPRESSED, UNSUBSCRIBED, DISABLED)");
        }
    }

    let mut shown = 0;
    for contact in filter.apply(&effective, reference) {
        let contact_bucket = classify(contact, reference);
        if let Some(key) = &bucket_key {
            if contact_bucket.as_str() != key {
                continue;
            }
        }
        println!(
            "[{}] {} <{}> | status={} | last_activity={}",
            contact_bucket.as_str(),
            contact.name,
            contact.email,
            contact.status,
            contact.last_activity.as_deref().unwrap_or("-"),
        );
        shown += 1;
    }
    println!("\n{shown} contact(s) shown (of {})", contacts.len());
    Ok(())
}

fn reengage(contacts: &[Contact], reference: NaiveDate) {
    let unengaged: Vec<&Contact> = contacts
        .iter()
        .filter(|c| classify(c, reference) == Bucket::Unengaged)
        .collect();

    println!("Unengaged contacts as of {reference}\n");
    for contact in &unengaged {
        let days = contact.days_since_activity(reference);
        if contact.can_send_reengagement(reference) {
            println!(
                "{} <{}> | {} days unengaged | eligible for re-engagement",
                contact.name, contact.email, days
            );
        } else {
            let since_send = listhealth_core::days_since_activity(
                contact.last_reengagement.as_deref(),
                reference,
            );
            println!(
                "{} <{}> | {} days unengaged | cooling down ({} day(s) left)",
                contact.name,
                contact.email,
                days,
                REENGAGEMENT_COOLDOWN_DAYS - since_send
            );
        }
    }
    let eligible = unengaged
        .iter()
        .filter(|c| c.can_send_reengagement(reference))
        .count();
    println!("\n{eligible} of {} eligible", unengaged.len());
}

fn export(
    contacts: &[Contact],
    reference: NaiveDate,
    categories: Vec<String>,
    out: Option<PathBuf>,
    counts: bool,
    options: bool,
) -> Result<()> {
    if options {
        for opt in EXPORT_OPTIONS {
            let kind = match opt.kind {
                CategoryKind::Bucket => "bucket",
                CategoryKind::Raw => "raw",
            };
            println!("{:<36}{:<8}{}", opt.value, kind, opt.label);
        }
        return Ok(());
    }

    if categories.is_empty() {
        bail!("no categories selected; pass --category (see --options)");
    }
    let categories: Vec<ExportCategory> = categories
        .iter()
        .map(|value| ExportCategory::from_value(&value.to_uppercase()))
        .collect();

    if counts {
        for (category, count) in category_counts(contacts, &categories, reference) {
            println!("{:<36}{:>5}", category.value(), count);
        }
        return Ok(());
    }

    let selected = select_for_export(contacts, &categories, reference);
    let rows = build_export_rows(&selected, reference);
    let csv = to_csv_string(&rows)?;

    let out = out.unwrap_or_else(|| {
        PathBuf::from(format!("contact_export_{}.csv", reference.format("%Y%m%d")))
    });
    // UTF-8 BOM so spreadsheet tools pick up the encoding
    fs::write(&out, format!("\u{FEFF}{csv}"))
        .with_context(|| format!("writing {}", out.display()))?;

    println!("Exported {} contact(s) to {}", rows.len(), out.display());
    Ok(())
}
