use chrono::NaiveDate;
use pythia::compatibility::Compatibility;
use pythia::iching::{cast, Coin, CoinSource, Line, Numbering, RngCoins};
use pythia::input::{parse_date, parse_date_time};
use pythia::matrix::DestinyMatrix;
use pythia::numerology::reduce;
use pythia::tarot::card_of_the_day;
use pythia::{ErrorCategory, OracleError};

/// Replays three tosses forever.
struct Triple([Coin; 3], usize);

impl CoinSource for Triple {
    fn toss(&mut self) -> Coin {
        let coin = self.0[self.1 % 3];
        self.1 += 1;
        coin
    }
}

#[test]
fn test_three_heads_six_times() {
    let mut coins = Triple([Coin::Heads; 3], 0);
    let casting = cast(&mut coins, Numbering::default()).unwrap();

    assert_eq!(casting.primary.lines, [Line::OldYang; 6]);
    assert_eq!(casting.primary.changing, vec![0, 1, 2, 3, 4, 5]);
    let secondary = casting.secondary.expect("every line is changing");
    assert_eq!(secondary.lines, [Line::YoungYin; 6]);
    assert_eq!((casting.primary.number, secondary.number), (1, 2));
}

#[test]
fn test_stable_lines_survive_the_change() {
    for seed in 0..200 {
        let casting = cast(&mut RngCoins::seeded(seed), Numbering::KingWen).unwrap();
        let Some(secondary) = &casting.secondary else {
            assert!(casting.primary.changing.is_empty());
            continue;
        };
        for (i, (before, after)) in casting
            .primary
            .lines
            .iter()
            .zip(secondary.lines.iter())
            .enumerate()
        {
            if casting.primary.changing.contains(&i) {
                assert_ne!(before.bit(), after.bit());
            } else {
                assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn test_reduce_properties() {
    for n in 1..=9 {
        assert_eq!(reduce(n, 9).unwrap(), n as u64);
    }
    assert_eq!(reduce(1990, 22).unwrap(), 19);
    assert_eq!(reduce(1990, 9).unwrap(), 1);
    assert_eq!(reduce(3, 3).unwrap(), 3);
}

#[test]
fn test_matrix_from_parsed_date() {
    let date = parse_date("15.03.1990").unwrap();
    let matrix = DestinyMatrix::calculate(date).unwrap();
    assert_eq!(
        (matrix.personal, matrix.destiny, matrix.social, matrix.spiritual),
        (6, 3, 19, 10)
    );
    for v in [matrix.personal, matrix.destiny, matrix.social, matrix.spiritual] {
        assert!(v <= 22);
    }
}

#[test]
fn test_compatibility_identical_dates_and_determinism() {
    let d = NaiveDate::from_ymd_opt(1988, 8, 8).unwrap();
    let first = Compatibility::score(d, d);
    assert_eq!((first.numerological, first.matrix), (90, 95));

    let other = NaiveDate::from_ymd_opt(1991, 12, 24).unwrap();
    let a = Compatibility::score(d, other);
    let b = Compatibility::score(d, other);
    assert_eq!(a.biorhythm, b.biorhythm);
    assert_eq!(a, b);
    assert!((50..=100).contains(&a.total));
}

#[test]
fn test_input_errors_are_input_category() {
    let err = parse_date("31.02.1990").unwrap_err();
    assert!(matches!(err, OracleError::InvalidDate { .. }));
    assert_eq!(err.category(), ErrorCategory::Input);

    let err = parse_date("01.01.4294967295").unwrap_err();
    assert!(matches!(err, OracleError::InvalidDate { .. }));
    assert_eq!(err.category(), ErrorCategory::Input);

    let noon = parse_date_time("15.03.1990").unwrap();
    assert_eq!(noon.format("%H:%M").to_string(), "12:00");
}

#[test]
fn test_card_of_the_day_text() {
    let card = card_of_the_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
    assert!(card.number < 22);
    assert!(card.to_string().starts_with(card.name));
}
