//! Resource limits and hostile input tests
//!
//! Oversized rosters, out-of-range numbers and names that would corrupt the
//! ledger must be rejected, and the fallback search must stay bounded.

use std::time::{Duration, Instant};

use swiss_pairing::pairing::{PartitionSearch, RematchTable};
use swiss_pairing::parsing::ledger::{parse_ledger_line, parse_round_text, Ledger, RoundFile};
use swiss_pairing::parsing::roster::parse_roster_text;
use swiss_pairing::parsing::ParseError;
use swiss_pairing::utils::validation::MAX_TEAMS;
use swiss_pairing::{compute_standings, StandingsError, TournamentConfig};

/// Test roster size limit enforcement
#[test]
fn test_roster_team_limit() {
    let at_limit: String = (0..MAX_TEAMS).map(|i| format!("T{i} ; {i}\n")).collect();
    let roster = parse_roster_text(&at_limit).unwrap();
    assert_eq!(roster.len(), MAX_TEAMS);

    let over_limit = format!("{at_limit}Extra ; {MAX_TEAMS}\n");
    let err = parse_roster_text(&over_limit).unwrap_err();
    assert!(matches!(err, ParseError::TooManyTeams(_)));
    assert!(err.to_string().contains(&MAX_TEAMS.to_string()));
}

/// Test that names which would split a ledger line are refused
#[test]
fn test_separator_injection_in_names() {
    for line in ["A - B ; 1", "A;B ; 1", "Tab\tTeam ; 1", " ; 1"] {
        let result = parse_roster_text(line);
        assert!(
            matches!(result, Err(ParseError::InvalidTeamName { .. } | ParseError::InvalidFormat(_))),
            "{line:?} should be rejected"
        );
    }
}

/// Test numeric overflow in scores and fouls
#[test]
fn test_score_overflow_rejected() {
    let lines = [
        "A - B ; 99999999999 - 0 ; 0 - 0",
        "A - B ; 1 - 0 ; 0 - 4294967296",
        "A - B ; -1 - 0 ; 0 - 0",
    ];
    for line in lines {
        assert!(
            matches!(parse_ledger_line(line, 1), Err(ParseError::InvalidFormat(_))),
            "{line:?} should be rejected"
        );
    }
}

/// Test that score totals too large for the counters fail instead of wrapping
#[test]
fn test_score_totals_overflow_is_an_error() {
    let roster = parse_roster_text("A ; 1\nB ; 2\n").unwrap();
    let rounds: Vec<_> = [
        "A - B ; 4000000000 - 0 ; 0 - 0\n",
        "B - A ; 0 - 4000000000 ; 0 - 0\n",
    ]
    .iter()
    .map(|text| match parse_round_text(text).unwrap() {
        RoundFile::Played(matches) => matches,
        other => panic!("expected a played round, got {other:?}"),
    })
    .collect();
    let ledger = Ledger::from_rounds(rounds);

    // B is applied first in round two and its conceded total overflows
    let err = compute_standings(&roster, &ledger, &TournamentConfig::default()).unwrap_err();
    assert_eq!(
        err,
        StandingsError::CounterOverflow {
            team: "B".to_string()
        }
    );
}

/// Test that the enumeration cap bounds the fallback search on a large field
#[test]
fn test_enumeration_cap_bounds_search() {
    // 30 fresh teams have 29!! (about 6e15) perfect matchings
    let table = RematchTable::new(30);
    let cap = 5_000;

    let start = Instant::now();
    let mut search = PartitionSearch::new(&table, cap);
    let count = search.by_ref().count();
    let elapsed = start.elapsed();

    assert_eq!(count, cap);
    assert!(search.cap_reached());
    assert!(
        elapsed < Duration::from_secs(10),
        "Capped search took {elapsed:?}"
    );
}
