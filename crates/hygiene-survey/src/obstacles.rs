//! Obstacles to implementing hygiene practices
//!
//! Two sources are analysed: the four yes/no obstacle columns, and the
//! free-text `Autres_obstacles` column listing other obstacles.

use std::collections::BTreeMap;

use hygiene_stats::{frequency::FrequencyTable, proportion::ProportionEstimate};

use crate::{
    record::Survey,
    schema::{Answer, Obstacle, UNKNOWN_LABEL, column},
};

/// Tokens with at most this many characters are discarded as noise.
const MIN_TOKEN_CHARS: usize = 4;

/// Share of enterprises reporting each obstacle.
///
/// The denominator is the number of `Yes`/`No` answers; unknown and missing
/// answers are left out. Obstacles without any `Yes`/`No` answer, or whose
/// column is absent, are omitted.
#[must_use]
pub fn obstacle_statistics(survey: &Survey) -> BTreeMap<Obstacle, ProportionEstimate> {
    Obstacle::ALL
        .into_iter()
        .filter(|obstacle| survey.has_column(obstacle.column()))
        .filter_map(|obstacle| {
            let answers = survey.records().iter().filter_map(|r| r.obstacle(obstacle));
            Some((obstacle, yes_among_known(answers)?))
        })
        .collect()
}

fn yes_among_known<I>(answers: I) -> Option<ProportionEstimate>
where
    I: IntoIterator<Item = Answer>,
{
    let (yes, known) = answers
        .into_iter()
        .filter(|answer| answer.is_known())
        .fold((0, 0), |(yes, known), answer| {
            (yes + u64::from(answer == Answer::Yes), known + 1)
        });
    ProportionEstimate::new(yes, known)
}

/// Splits one free-text entry into obstacle tokens.
///
/// Separators are `,` and `;`. Tokens are trimmed and those with fewer than
/// four characters are dropped.
///
/// # Examples
///
/// ```
/// use hygiene_survey::obstacles::tokenize_obstacles;
///
/// let tokens = tokenize_obstacles("manque d'eau, financement; equipement").collect::<Vec<_>>();
/// assert_eq!(tokens, ["manque d'eau", "financement", "equipement"]);
///
/// assert_eq!(tokenize_obstacles("eau; ; coût").count(), 1);
/// ```
pub fn tokenize_obstacles(entry: &str) -> impl Iterator<Item = &str> {
    entry
        .split([',', ';'])
        .map(str::trim)
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
}

/// Counts obstacle tokens over many free-text entries.
///
/// Entries equal to `Inconnu` are skipped. Tokens are compared exactly,
/// case included. The result is ordered by descending count; ties keep their
/// first-encounter order.
#[must_use]
pub fn tally_specific_obstacles<'a, I>(entries: I) -> FrequencyTable<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::new();
    for entry in entries.into_iter().filter(|e| *e != UNKNOWN_LABEL) {
        for token in tokenize_obstacles(entry) {
            table.add(token.to_owned());
        }
    }
    table.sort_by_count_desc();
    table
}

/// Tally of the `Autres_obstacles` column.
///
/// Empty when the column is absent or holds no usable token.
#[must_use]
pub fn specific_obstacles(survey: &Survey) -> FrequencyTable<String> {
    if !survey.has_column(column::OTHER_OBSTACLES) {
        tracing::debug!(column = column::OTHER_OBSTACLES, "column absent, no specific obstacles");
        return FrequencyTable::new();
    }
    tally_specific_obstacles(
        survey
            .records()
            .iter()
            .filter_map(|r| r.other_obstacles.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_example_entry() {
        let table = tally_specific_obstacles(["manque d'eau, financement; equipement"]);
        assert_eq!(table.len(), 3);
        for token in ["manque d'eau", "financement", "equipement"] {
            assert_eq!(table.get(token), 1, "{token}");
        }
    }

    #[test]
    fn test_short_tokens_use_char_count() {
        // "éau" is three characters but four bytes.
        assert_eq!(tokenize_obstacles("éau").count(), 0);
        assert_eq!(tokenize_obstacles("coût").count(), 1);
    }

    #[test]
    fn test_tally_order_and_case() {
        let table = tally_specific_obstacles([
            "Manque de moyens; locaux",
            "manque de moyens, locaux",
            "Inconnu",
            "locaux ; eau",
        ]);
        let order = table.iter().collect::<Vec<_>>();
        assert_eq!(
            order,
            [
                (&"locaux".to_owned(), 3),
                (&"Manque de moyens".to_owned(), 1),
                (&"manque de moyens".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn test_missing_column_is_empty() {
        let survey = Survey::from_reader("ID_entreprise,Obstacle_humain\nE1,Oui\n".as_bytes()).unwrap();
        assert!(specific_obstacles(&survey).is_empty());
    }

    #[test]
    fn test_obstacle_denominator_excludes_unknown() {
        let csv = "ID_entreprise,Obstacle_technique,Obstacle_humain\n\
                   E1,Oui,Inconnu\n\
                   E2,Non,Inconnu\n\
                   E3,Inconnu,\n\
                   E4,Oui,Inconnu\n";
        let survey = Survey::from_reader(csv.as_bytes()).unwrap();
        let stats = obstacle_statistics(&survey);

        let technical = &stats[&Obstacle::Technical];
        assert_eq!((technical.count, technical.total), (2, 3));
        // No Yes/No answer at all.
        assert!(!stats.contains_key(&Obstacle::Human));
        // Column absent.
        assert!(!stats.contains_key(&Obstacle::Financial));
    }
}
