//! Heuristic text extraction over a rendered page.
//!
//! Page structures are unknown ahead of time, so extraction is an ordered set
//! of independent strategies over the same DOM rather than one schema-aware
//! parser. Each strategy declares its own selectors and emits zero or more
//! text fragments; a selector that matches nothing (or fails to parse)
//! contributes nothing and never blocks the other strategies. Over-extraction
//! is fine — the consumer is a language model that discounts noise.

use scraper::{ElementRef, Html, Selector};

/// A single extraction heuristic: pure function from DOM to fragments.
pub type Strategy = fn(&Html) -> Vec<String>;

/// All strategies, in the order their output is appended per page.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("generic_text", generic_text),
    ("listing_cards", listing_cards),
    ("directory_rows", directory_rows),
    ("tables", tables),
];

/// Run every strategy against `doc` and collect fragments in strategy order.
pub fn extract_fragments(doc: &Html) -> Vec<String> {
    let mut fragments = Vec::new();
    for (name, strategy) in STRATEGIES {
        let frags = strategy(doc);
        tracing::trace!(
            target: "web.extract",
            strategy = name,
            fragment_count = frags.len(),
            "extract.strategy.done"
        );
        fragments.extend(frags);
    }
    fragments
}

/// Element text the way a reader sees it: text nodes joined, whitespace
/// collapsed, trimmed.
fn visible_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bylines ("By Jane Doe") are attribution noise, not content.
fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && !text.starts_with("By ")
}

/// Headings (h1-h3), paragraphs, and anchors in document order.
///
/// Anchors become `[text](href)` and only count when both halves are present;
/// everything else is kept as trimmed visible text.
fn generic_text(doc: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1, h2, h3, p, a") else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for el in doc.select(&selector) {
        let text = visible_text(&el);
        if el.value().name() == "a" {
            if let Some(href) = el.value().attr("href") {
                if !text.is_empty() {
                    out.push(format!("[{text}]({href})"));
                }
            }
        } else if is_valid_text(&text) {
            out.push(text);
        }
    }
    out
}

/// Venue/cafe listing cards keyed on the marker container class.
///
/// Sub-fields are optional; a card is emitted as long as one of them carries
/// text. The class names are the generated ones observed on the target site
/// and will silently match nothing elsewhere.
fn listing_cards(doc: &Html) -> Vec<String> {
    let (Ok(card), Ok(name), Ok(category), Ok(price)) = (
        Selector::parse(".sc-1q7bklc-10"),
        Selector::parse(".sc-1hp8d8a-0"),
        Selector::parse(".fSxdnq"),
        Selector::parse(".KXcjT"),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for card_el in doc.select(&card) {
        let field = |sel: &Selector| {
            card_el
                .select(sel)
                .next()
                .map(|el| visible_text(&el))
                .unwrap_or_default()
        };
        let name = field(&name);
        let category = field(&category);
        let price = field(&price);

        if !name.is_empty() || !category.is_empty() || !price.is_empty() {
            out.push(format!(
                "\nName: {name}\nCategory: {category}\nPrice for two: {price}"
            ));
        }
    }
    out
}

/// Business-directory result rows assembled from three parallel element lists.
///
/// The lists are matched positionally up to the number of names; a shorter
/// ratings or addresses list just yields empty fields rather than skewing the
/// pairing.
fn directory_rows(doc: &Html) -> Vec<String> {
    let (Ok(name_sel), Ok(rating_sel), Ok(address_sel)) = (
        Selector::parse("h3.jsx-7cbb814d75c86232.resultbox_title_anchor"),
        Selector::parse("li.resultbox_totalrate"),
        Selector::parse("div.locatcity"),
    ) else {
        return Vec::new();
    };

    let names: Vec<String> = doc.select(&name_sel).map(|el| visible_text(&el)).collect();
    let ratings: Vec<String> = doc
        .select(&rating_sel)
        .map(|el| visible_text(&el))
        .collect();
    let addresses: Vec<String> = doc
        .select(&address_sel)
        .map(|el| visible_text(&el))
        .collect();

    let mut out = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let rating = ratings.get(i).cloned().unwrap_or_default();
        let address = addresses.get(i).cloned().unwrap_or_default();

        if !name.is_empty() || !rating.is_empty() || !address.is_empty() {
            out.push(format!(
                "\nName: {name}\nRating: {rating}\nAddress: {address}"
            ));
        }
    }
    out
}

/// Every table, row by row, as tab-separated lines.
///
/// Header and data cells are taken together in document order so mixed rows
/// keep their on-page column layout.
fn tables(doc: &Html) -> Vec<String> {
    let (Ok(table_sel), Ok(row_sel), Ok(cell_sel)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("th, td"),
    ) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for table in doc.select(&table_sel) {
        for row in table.select(&row_sel) {
            let cells: Vec<String> = row.select(&cell_sel).map(|el| visible_text(&el)).collect();
            if cells.iter().any(|c| !c.is_empty()) {
                out.push(cells.join("\t"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn generic_text_skips_bylines_and_empty_elements() {
        let doc = parse(
            r#"<h1>Big News</h1>
               <p>By Jane Doe</p>
               <p>   </p>
               <p>Actual story body.</p>"#,
        );
        let frags = generic_text(&doc);
        assert_eq!(frags, vec!["Big News", "Actual story body."]);
    }

    #[test]
    fn anchors_need_both_text_and_href() {
        let doc = parse(
            r#"<a href="https://x.example/a">Read more</a>
               <a href="https://x.example/b"></a>
               <a>No target</a>"#,
        );
        let frags = generic_text(&doc);
        assert_eq!(frags, vec!["[Read more](https://x.example/a)"]);
    }

    #[test]
    fn card_with_only_a_name_still_emits_a_record() {
        let doc = parse(
            r#"<div class="sc-1q7bklc-10">
                 <div class="sc-1hp8d8a-0">Blue Tokai</div>
               </div>"#,
        );
        let frags = listing_cards(&doc);
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0], "\nName: Blue Tokai\nCategory: \nPrice for two: ");
    }

    #[test]
    fn fully_empty_card_is_dropped() {
        let doc = parse(r#"<div class="sc-1q7bklc-10"><span>unrelated</span></div>"#);
        assert!(listing_cards(&doc).is_empty());
    }

    #[test]
    fn directory_rows_pad_short_lists_with_empty_fields() {
        let doc = parse(
            r#"<h3 class="jsx-7cbb814d75c86232 resultbox_title_anchor">Cafe A</h3>
               <h3 class="jsx-7cbb814d75c86232 resultbox_title_anchor">Cafe B</h3>
               <li class="resultbox_totalrate">4.2</li>
               <div class="locatcity">Bandra</div>"#,
        );
        let frags = directory_rows(&doc);
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0], "\nName: Cafe A\nRating: 4.2\nAddress: Bandra");
        assert_eq!(frags[1], "\nName: Cafe B\nRating: \nAddress: ");
    }

    #[test]
    fn table_header_plus_data_row_yields_two_tsv_lines() {
        let doc = parse(
            r#"<table>
                 <tr><th>City</th><th>Cafes</th></tr>
                 <tr><td>Mumbai</td><td>120</td></tr>
                 <tr><td> </td><td></td></tr>
               </table>"#,
        );
        let frags = tables(&doc);
        assert_eq!(frags, vec!["City\tCafes", "Mumbai\t120"]);
    }

    #[test]
    fn strategy_order_is_stable_across_runs() {
        let html = r#"<h2>Guide</h2>
            <div class="sc-1q7bklc-10"><div class="sc-1hp8d8a-0">Spot</div></div>
            <table><tr><td>row</td></tr></table>"#;
        let first = extract_fragments(&parse(html));
        let second = extract_fragments(&parse(html));
        assert_eq!(first, second);
        assert_eq!(first[0], "Guide");
        assert!(first[1].starts_with("\nName: Spot"));
        assert_eq!(first[2], "row");
    }
}
