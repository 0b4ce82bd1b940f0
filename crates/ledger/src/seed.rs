//! Deployment seed data.

use chrono::NaiveDate;
use passcard_domain::Offer;

fn offer(
    name: &str,
    description: &str,
    location: &str,
    hours: &str,
    image_ref: &str,
    expiry: NaiveDate,
    remaining: u32,
) -> Offer {
    Offer {
        // Ids are assigned by the ledger at deployment.
        id: 0,
        name: name.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        hours: hours.to_string(),
        image_ref: image_ref.to_string(),
        expiry,
        remaining,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The four Toronto museums the original contract constructor seeds.
#[must_use]
pub fn toronto_museums() -> Vec<Offer> {
    vec![
        offer(
            "Royal Ontario Museum",
            "It is one of the largest museums in North America and the largest in Canada.",
            "100 Queens Park, Toronto, ON",
            "Mon-Fri, 10a.m.-5:30p.m.",
            "./images/on_royal.jpg",
            date(2020, 9, 15),
            10,
        ),
        offer(
            "Gardiner Museum",
            "The collection is made up of two types of ceramics, earthenware, and porcelain.",
            "111 Queens Park, Toronto, ON",
            "Mon-Fri, 10a.m.-6:00p.m.",
            "./images/gardiner.jpg",
            date(2020, 10, 8),
            30,
        ),
        offer(
            "Art Gallery of Ontario",
            "Its permanent collection represents many artistic movements and eras of art history.",
            "317 Dundas St W, Toronto, ON",
            "Mon-Fri, 10:30a.m.-5p.m.",
            "./images/ago.jpg",
            date(2020, 11, 20),
            25,
        ),
        offer(
            "Textile Museum of Canada",
            "It is a museum dedicated to the collection, exhibition, and documentation of textiles.",
            "55 Centre Ave, Toronto, ON",
            "Mon-Sun, 11a.m.-5p.m.",
            "./images/textile.jpg",
            date(2020, 12, 16),
            1,
        ),
    ]
}
