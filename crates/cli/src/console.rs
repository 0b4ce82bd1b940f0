//! Terminal renderer for the demo.

use passcard_domain::Projection;
use passcard_sync::Renderer;
use prettytable::{Table, row};

/// Renders projections as tables on stdout.
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn show_loading(&self) {
        println!("... loading ...");
    }

    fn render(&self, projection: &Projection) {
        println!("\nYour Account: {}", projection.account);

        let mut table = Table::new();
        table.add_row(row!["ID", "MUSEUM", "EXPIRES", "LEFT", "STATUS"]);
        for offer in &projection.offers {
            let status = if projection.holds(offer.id) {
                "held"
            } else if offer.is_depleted() {
                "sold out"
            } else {
                "available"
            };
            table.add_row(row![
                offer.id,
                offer.name,
                offer.expiry,
                offer.remaining,
                status
            ]);
        }
        table.printstd();

        println!("You hold {} pass card(s):", projection.held_count);
        for offer in projection.held_offers() {
            println!("  - {} (expires {})", offer.name, offer.expiry);
        }
    }

    fn show_error(&self, message: &str) {
        println!("! {message} (previous view kept; rerun to retry)");
    }
}
