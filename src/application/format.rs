//! Presentation strings for the ticker strip and headline feed.

use crate::domain::entities::article::ArticleRecord;
use crate::domain::values::movement::Movement;
use html_escape::encode_text;

/// Renders movements and their news into display lines.
///
/// Kept free of any I/O so the pipeline can target plain text or web
/// markup by swapping the implementation.
pub trait ArticleFormatter: Send + Sync {
    /// One ticker point; rendered for every symbol with a known move.
    fn format_ticker_point(&self, symbol: &str, movement: &Movement) -> String;

    /// Headline for a notable move. Falls back to a "No News Found"
    /// line when `articles` is empty.
    fn format_headline(
        &self,
        symbol: &str,
        company_name: &str,
        movement: &Movement,
        articles: &[ArticleRecord],
    ) -> String;
}

fn headline_text(company_name: &str, articles: &[ArticleRecord]) -> String {
    match articles.first() {
        Some(article) => article.title.clone(),
        None => format!("No News Found for {company_name}"),
    }
}

/// `| BHP: 🔻 3.1% - Title |`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl ArticleFormatter for PlainFormatter {
    fn format_ticker_point(&self, symbol: &str, movement: &Movement) -> String {
        format!(
            "| {symbol} - {} {:.1}% |",
            movement.direction.glyph(),
            movement.magnitude()
        )
    }

    fn format_headline(
        &self,
        symbol: &str,
        company_name: &str,
        movement: &Movement,
        articles: &[ArticleRecord],
    ) -> String {
        format!(
            "| {symbol}: {} {:.1}% - {} |",
            movement.direction.glyph(),
            movement.magnitude(),
            headline_text(company_name, articles)
        )
    }
}

/// Same layout as [`PlainFormatter`] with the symbol in `<b>` and the
/// headline text HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl ArticleFormatter for HtmlFormatter {
    fn format_ticker_point(&self, symbol: &str, movement: &Movement) -> String {
        format!(
            "| <b>{}</b> - {} {:.1}% |",
            encode_text(symbol),
            movement.direction.glyph(),
            movement.magnitude()
        )
    }

    fn format_headline(
        &self,
        symbol: &str,
        company_name: &str,
        movement: &Movement,
        articles: &[ArticleRecord],
    ) -> String {
        format!(
            "| <b>{}</b>: {} {:.1}% - {} |",
            encode_text(symbol),
            movement.direction.glyph(),
            movement.magnitude(),
            encode_text(&headline_text(company_name, articles))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::direction::Direction;
    use chrono::NaiveDate;

    fn movement(direction: Direction, percent_change: f64) -> Movement {
        Movement {
            direction,
            percent_change,
            session_date: NaiveDate::from_ymd_opt(2025, 2, 24).unwrap(),
        }
    }

    #[test]
    fn test_headline_with_article() {
        let line = PlainFormatter.format_headline(
            "AAA",
            "Alpha Co",
            &movement(Direction::Down, -3.0),
            &[ArticleRecord::new("Alpha drops", "", "")],
        );
        assert_eq!(line, "| AAA: 🔻 3.0% - Alpha drops |");
    }

    #[test]
    fn test_headline_fallback() {
        let line = PlainFormatter.format_headline("AAA", "Alpha Co", &movement(Direction::Up, 5.2), &[]);
        assert_eq!(line, "| AAA: 🔺 5.2% - No News Found for Alpha Co |");
        assert!(line.contains("No News Found"));
    }

    #[test]
    fn test_ticker_point() {
        let line = PlainFormatter.format_ticker_point("CBA", &movement(Direction::Up, 1.2));
        assert_eq!(line, "| CBA - 🔺 1.2% |");
    }

    #[test]
    fn test_flat_ticker_point() {
        let line = PlainFormatter.format_ticker_point("CBA", &movement(Direction::Down, 0.0));
        assert_eq!(line, "| CBA - 🔻 0.0% |");
    }

    #[test]
    fn test_placeholder_renders() {
        let line = PlainFormatter.format_headline(
            "AAA",
            "Alpha Co",
            &movement(Direction::Down, -4.0),
            &[ArticleRecord::placeholder("down")],
        );
        assert_eq!(line, "| AAA: 🔻 4.0% - Unable to retrieve news data. |");
    }

    #[test]
    fn test_html_escapes_title() {
        let line = HtmlFormatter.format_headline(
            "AAA",
            "Alpha Co",
            &movement(Direction::Up, 3.0),
            &[ArticleRecord::new("Profits <up> & away", "", "")],
        );
        assert_eq!(line, "| <b>AAA</b>: 🔺 3.0% - Profits &lt;up&gt; &amp; away |");
    }

    #[test]
    fn test_html_ticker() {
        let line = HtmlFormatter.format_ticker_point("WES", &movement(Direction::Down, -0.4));
        assert_eq!(line, "| <b>WES</b> - 🔻 0.4% |");
    }

    #[test]
    fn test_html_escapes_symbol_and_fallback_name() {
        let line = HtmlFormatter.format_headline("A&B", "A&B <Holdings>", &movement(Direction::Down, -4.0), &[]);
        assert_eq!(
            line,
            "| <b>A&amp;B</b>: 🔻 4.0% - No News Found for A&amp;B &lt;Holdings&gt; |"
        );
    }
}
