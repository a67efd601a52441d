// Logic for associating a line of text with a registered person.
//
// Matching is plain substring containment, case-sensitive, no tokenization
// and no word-boundary checks, so a short name inside a longer unrelated
// word will match. When several registrants appear on one line the LAST
// registered one wins; callers register people in ascending priority. Both
// behaviors are deliberate and load-bearing: changing them changes which
// person every ambiguous line lands on.

use crate::model::item::Person;

/// Returns the last person in registration order whose name or phonetic
/// alias appears in `line`, or `None` when nobody matches.
pub fn match_person<'a>(line: &str, people: &'a [Person]) -> Option<&'a Person> {
    people.iter().rev().find(|person| person.appears_in(line))
}
