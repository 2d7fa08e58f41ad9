//! Newswire CLI - fetch film news from the Guardian content API

use clap::{Parser, ValueEnum};
use newswire::{Article, FetchQuery, NewsClient, OrderBy};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Output format for fetched articles
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable article list
    #[default]
    Text,
    /// JSON array of articles
    Json,
}

/// Newswire - fetch and display news articles from the Guardian
#[derive(Parser, Debug)]
#[command(name = "newswire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API key (falls back to GUARDIAN_API_KEY, then the public "test" key)
    #[arg(long)]
    api_key: Option<String>,

    /// Result ordering
    #[arg(long, default_value = "newest")]
    order_by: OrderBy,

    /// Earliest publication date to include (YYYY-MM-DD)
    #[arg(long, default_value = newswire::DEFAULT_FROM_DATE)]
    from_date: String,

    /// Section to search within
    #[arg(long, default_value = newswire::DEFAULT_SECTION)]
    section: String,

    /// Search term
    #[arg(long, short, default_value = newswire::DEFAULT_SEARCH_TERM)]
    query: String,

    /// Output format
    #[arg(long, short, default_value = "text")]
    output: OutputFormat,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .or_else(|| std::env::var("GUARDIAN_API_KEY").ok())
        .unwrap_or_else(|| "test".to_string());

    let query = FetchQuery::new(api_key)
        .order_by(cli.order_by)
        .section(cli.section)
        .from_date(cli.from_date)
        .search_term(cli.query);

    let articles = NewsClient::default().fetch_articles(&query).await;

    match cli.output {
        OutputFormat::Text => writeln_safe(&format_text(&articles)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&articles).unwrap_or_else(|e| {
                eprintln!("Error serializing articles: {}", e);
                std::process::exit(1);
            });
            writeln_safe(&json);
        }
    }
}

/// Format articles as a readable list, or the empty-state line
fn format_text(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No articles found.".to_string();
    }

    let mut output = String::new();
    for article in articles {
        output.push_str(&format!("{}\n", article.title));
        output.push_str(&format!("  Section: {}\n", article.section_name));
        if !article.author.is_empty() {
            output.push_str(&format!("  {}\n", article.author));
        }
        if let Some(time) = article.publication_time {
            output.push_str(&format!("  Published: {}\n", time.format("%Y-%m-%d %H:%M")));
        }
        output.push_str(&format!("  {}\n\n", article.url));
    }

    // Drop the blank line after the last entry
    output.truncate(output.trim_end().len());
    output
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            author: "Author: Jane Doe".to_string(),
            title: "Marvel's next phase announced".to_string(),
            section_name: "Film".to_string(),
            publication_time: chrono_datetime(2020, 5, 3, 18, 45),
            url: "https://example.com/film/1".to_string(),
        }
    }

    fn chrono_datetime(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
    ) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDate::from_ymd_opt(y, mo, d).and_then(|date| date.and_hms_opt(h, mi, 0))
    }

    #[test]
    fn test_format_text_full_article() {
        let output = format_text(&[sample_article()]);

        assert!(output.starts_with("Marvel's next phase announced\n"));
        assert!(output.contains("  Section: Film\n"));
        assert!(output.contains("  Author: Jane Doe\n"));
        assert!(output.contains("  Published: 2020-05-03 18:45\n"));
        assert!(output.ends_with("  https://example.com/film/1"));
    }

    #[test]
    fn test_format_text_omits_blank_fields() {
        let article = Article {
            author: String::new(),
            publication_time: None,
            ..sample_article()
        };
        let output = format_text(&[article]);

        assert!(!output.contains("Author:"));
        assert!(!output.contains("Published:"));
    }

    #[test]
    fn test_format_text_empty_state() {
        assert_eq!(format_text(&[]), "No articles found.");
    }
}
