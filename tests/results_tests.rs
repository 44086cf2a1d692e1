use canteen_poll_bot::poll::results::{render_results, Tally};
use canteen_poll_bot::poll::{Vote, VoteMap, VoteStatus};
use chrono::NaiveDate;

fn poll_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date")
}

fn votes(entries: &[(&str, &str, Option<&str>, VoteStatus)]) -> VoteMap {
    entries
        .iter()
        .map(|(id, name, handle, status)| {
            (
                id.to_string(),
                Vote {
                    display_name: name.to_string(),
                    handle: handle.map(str::to_string),
                    status: *status,
                },
            )
        })
        .collect()
}

#[test]
fn test_render_full_summary() {
    let votes = votes(&[
        ("1", "Аня", Some("anya"), VoteStatus::Eating),
        ("2", "Борис", None, VoteStatus::Absent),
    ]);

    let text = render_results(&votes, poll_day());

    let expected = "📊 Результаты на 03.09.2024\n\n\
                    🍽 Будут есть (1):\nАня (@anya)\n\n\
                    🙅 Не будут есть (0):\n—\n\n\
                    🏫 Не придут в школу (1):\nБорис";
    assert_eq!(text, expected);
}

#[test]
fn test_render_is_deterministic() {
    let votes = votes(&[
        ("3", "Вика", None, VoteStatus::NotEating),
        ("1", "Аня", Some("anya"), VoteStatus::Eating),
        ("2", "Борис", None, VoteStatus::Eating),
    ]);

    assert_eq!(render_results(&votes, poll_day()), render_results(&votes.clone(), poll_day()));
}

#[test]
fn test_multiple_voters_in_one_category_are_listed_per_line() {
    let votes = votes(&[
        ("1", "Аня", None, VoteStatus::Eating),
        ("2", "Борис", None, VoteStatus::Eating),
    ]);

    let text = render_results(&votes, poll_day());
    assert!(text.contains("🍽 Будут есть (2):\nАня\nБорис\n\n"));
}

#[test]
fn test_voters_are_listed_in_voting_order() {
    let votes = votes(&[
        ("9", "Аня", None, VoteStatus::Eating),
        ("10", "Борис", None, VoteStatus::Eating),
    ]);

    let text = render_results(&votes, poll_day());
    assert!(text.contains("🍽 Будут есть (2):\nАня\nБорис\n\n"));
}

#[test]
fn test_counts_match_partitions() {
    let statuses = [VoteStatus::Eating, VoteStatus::NotEating, VoteStatus::Absent];
    let mut map = VoteMap::new();
    for i in 0..17 {
        map.insert(
            i.to_string(),
            Vote {
                display_name: format!("Ученик {i}"),
                handle: None,
                status: statuses[i % 3],
            },
        );
    }

    let tally = Tally::from_votes(&map);
    assert_eq!(tally.total(), 17);
    assert_eq!(tally.eating.len(), 6);
    assert_eq!(tally.not_eating.len(), 6);
    assert_eq!(tally.absent.len(), 5);

    let text = render_results(&map, poll_day());
    assert!(text.contains("Будут есть (6)"));
    assert!(text.contains("Не будут есть (6)"));
    assert!(text.contains("Не придут в школу (5)"));
}

#[test]
fn test_target_date_is_the_next_day() {
    let new_years_eve = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
    let text = render_results(&VoteMap::new(), new_years_eve);
    assert!(text.starts_with("📊 Результаты на 01.01.2025\n"));
}
