//! Papers command - lists stored papers with their review statistics.

use paperboard::{
    Instance,
    papers::{PaperFilter, PaperSummary},
};
use serde::Serialize;

use crate::backend::create_backend;
use crate::cli::PapersArgs;
use crate::output::{OutputFormat, format_average, print_table, truncate};

const TITLE_WIDTH: usize = 48;

/// One paper in `--format json` output
#[derive(Debug, Serialize)]
struct PaperRow<'a> {
    id: String,
    title: &'a str,
    owner: &'a str,
    authors: &'a [String],
    publication_date: &'a str,
    url: &'a str,
    posts: usize,
    average_score: f64,
}

impl<'a> From<&'a PaperSummary> for PaperRow<'a> {
    fn from(summary: &'a PaperSummary) -> Self {
        Self {
            id: summary.id.to_safe(),
            title: &summary.paper.title,
            owner: &summary.paper.owner,
            authors: &summary.paper.authors,
            publication_date: &summary.paper.publication_date,
            url: &summary.paper.url,
            posts: summary.post_count,
            average_score: summary.average_score,
        }
    }
}

fn table_rows(papers: &[PaperSummary]) -> Vec<Vec<String>> {
    papers
        .iter()
        .map(|s| {
            vec![
                s.id.to_safe(),
                truncate(&s.paper.title, TITLE_WIDTH),
                s.paper.owner.clone(),
                s.post_count.to_string(),
                format_average(s.average_score),
            ]
        })
        .collect()
}

/// Run the papers command
pub async fn run(args: &PapersArgs) -> Result<(), Box<dyn std::error::Error>> {
    let backend = create_backend(&args.backend_config).await?;
    let instance = Instance::open(backend);

    let filter = match &args.author {
        Some(author) => PaperFilter::AuthoredBy(author.clone()),
        None => PaperFilter::All,
    };
    let papers = instance.list_papers(&filter).await?;

    match args.format {
        OutputFormat::Human => {
            if papers.is_empty() {
                println!("No papers found");
            } else {
                print_table(
                    &["ID", "TITLE", "OWNER", "POSTS", "AVG"],
                    &table_rows(&papers),
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<PaperRow<'_>> = papers.iter().map(PaperRow::from).collect();
            println!("{}", serde_json::to_string(&rows)?);
        }
    }

    Ok(())
}
