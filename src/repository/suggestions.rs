use crate::model::Suggestion;
use std::collections::HashMap;

/// Number of suggestions returned for a query.
pub const MAX_SUGGESTIONS: usize = 5;

const STRIPPED: [char; 6] = ['.', ',', '!', '?', '"', '-'];

/// Ranks title tokens that contain `query`, ignoring case.
///
/// Tokens are grouped by their lower-cased form and ordered by descending frequency. Ties
/// keep the order in which the tokens were first seen.
pub fn to_suggestions<'a>(titles: impl IntoIterator<Item = &'a str>, query: &str) -> Vec<Suggestion> {
    let query = query.to_lowercase();
    let mut ranked: Vec<Suggestion> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for title in titles {
        let cleaned: String = title.chars().filter(|c| !STRIPPED.contains(c)).collect();
        for token in cleaned.split_whitespace() {
            let token = token.to_lowercase();
            if !token.contains(&query) {
                continue;
            }
            match positions.get(&token) {
                Some(&index) => ranked[index].count += 1,
                None => {
                    positions.insert(token.clone(), ranked.len());
                    ranked.push(Suggestion::new(token, 1));
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}
