//! Decode a card dump file and print every page.
//!
//! Usage: `cargo run --example replay_dump -- card.dump`
//! Without an argument a built-in sample Navigo card is used.

use libcalypso::card::{CalypsoCardBuilder, CardDump};
use libcalypso::display::{get_page, next_page};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dump = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)?.parse::<CardDump>()?,
        None => libcalypso::test_support::navigo_dump(12_345_678, &[0x0000, 0x0002]),
    };
    let card = CalypsoCardBuilder::from_dump(&dump)?;

    let mut page = 0;
    loop {
        if let Some(text) = get_page(&card, page) {
            println!("{}", text);
        }
        let next = next_page(&card, page);
        if next == page {
            break;
        }
        page = next;
    }
    Ok(())
}
