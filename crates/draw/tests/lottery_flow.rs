//! Integration tests for a full lottery event.
//!
//! Tests drive a draw through sales, the draw and both reports using the
//! public API only, the way a front end would.

use bucket::{RandomPool, ScriptedSource, StdRngSource};
use draw::{DrawError, LotteryDraw, SharedLotteryDraw};
use prize::{FlatPrizes, PercentagesOfHalfPot, WinnerTakesAll};
use types::{BallNumber, Money};

fn percentages() -> Box<PercentagesOfHalfPot> {
    Box::new(PercentagesOfHalfPot::new(&[0.75, 0.15, 0.10]).unwrap())
}

/// Pool 1..=5, two balls drawn, no purchases.
#[test]
fn test_draw_without_participants_reports_two_distinct_balls() {
    let mut pool = RandomPool::sequential(1, 5, Box::new(StdRngSource::from_os()));
    let mut draw = LotteryDraw::new(
        &mut pool,
        2,
        Money::from_units(200),
        Money::from_units(10),
        percentages(),
    )
    .unwrap();

    draw.draw().unwrap();
    let report = draw.drawn_balls_report().unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);

    let numbers: Vec<i64> = lines
        .iter()
        .map(|line| {
            line.strip_prefix("Drawn ball: ")
                .expect("line starts with label")
                .parse()
                .expect("ball number")
        })
        .collect();
    assert!(numbers.iter().all(|n| (1..=5).contains(n)));
    assert_ne!(numbers[0], numbers[1]);
    assert!(!report.ends_with('\n'));
}

#[test]
fn test_full_event_with_default_policy() {
    let mut pool = RandomPool::sequential(1, 50, Box::new(StdRngSource::seeded(2024)));
    let mut draw = LotteryDraw::new(
        &mut pool,
        3,
        Money::from_units(200),
        Money::from_units(10),
        percentages(),
    )
    .unwrap();

    let buyers = ["Ada", "Grace", "Linus", "Ken"];
    let tickets: Vec<BallNumber> = buyers
        .iter()
        .map(|name| draw.purchase_ticket(name).unwrap())
        .collect();
    assert_eq!(draw.pot(), Money::from_units(240));
    assert_eq!(draw.tickets_left(), 46);

    assert_eq!(
        draw.winners_report(),
        Err(DrawError::NotYetDrawn),
        "winners are unknown before the draw"
    );

    draw.draw().unwrap();
    assert_eq!(draw.purchase_ticket("Late"), Err(DrawError::AlreadyClosed));
    assert_eq!(draw.draw(), Err(DrawError::AlreadyClosed));

    // Pot 240 → half 120 → 90 / 18 / 12
    let winners = draw.winners().unwrap();
    let prizes: Vec<Money> = winners.iter().map(|w| w.prize).collect();
    assert_eq!(
        prizes,
        vec![Money::from_units(90), Money::from_units(18), Money::from_units(12)]
    );

    let purchased = draw.purchased_tickets();
    for winner in &winners {
        let expected = tickets
            .iter()
            .position(|t| *t == winner.ball)
            .map(|i| buyers[i].to_string());
        assert_eq!(winner.participant, expected);
        assert_eq!(purchased.get(&winner.ball).cloned(), expected);
    }

    let report = draw.winners_report().unwrap();
    let rows: Vec<&str> = report.split('\n').collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        "            1st ball            2nd ball            3rd ball"
    );
    assert!(rows[1].contains("90.00$"));
    assert!(rows[1].contains("18.00$"));
    assert!(rows[1].contains("12.00$"));
}

#[test]
fn test_two_buyers_both_win_in_draw_order() {
    // Pick the last item each time: tickets go 2 then 1, balls are drawn 2 then 1
    let mut pool = RandomPool::sequential(1, 2, Box::new(ScriptedSource::new(vec![usize::MAX])));
    let mut draw = LotteryDraw::new(
        &mut pool,
        2,
        Money::from_units(10),
        Money::ZERO,
        percentages(),
    )
    .unwrap();

    assert_eq!(draw.purchase_ticket("A").unwrap(), BallNumber(2));
    assert_eq!(draw.purchase_ticket("B").unwrap(), BallNumber(1));
    draw.draw().unwrap();

    assert_eq!(
        draw.drawn_balls().unwrap(),
        vec![BallNumber(2), BallNumber(1)]
    );
    assert_eq!(
        draw.winners_report().unwrap(),
        "            1st ball            2nd ball\n           A: 03.75$           B: 00.75$"
    );
}

#[test]
fn test_strategy_is_substitutable() {
    let mut pool = RandomPool::sequential(1, 3, Box::new(ScriptedSource::first_item()));

    let mut flat = LotteryDraw::new(
        &mut pool,
        3,
        Money::from_units(100),
        Money::from_units(1),
        Box::new(FlatPrizes::new(vec![Money::from_units(40)]).unwrap()),
    )
    .unwrap();
    flat.draw().unwrap();
    assert_eq!(
        flat.winners_report().unwrap(),
        "            1st ball            2nd ball            3rd ball\n   No winner: 40.00$   No winner: 00.00$   No winner: 00.00$"
    );

    let mut jackpot = LotteryDraw::new(
        &mut pool,
        1,
        Money::from_units(100),
        Money::from_units(1),
        Box::new(WinnerTakesAll),
    )
    .unwrap();
    jackpot.purchase_ticket("Solo").unwrap();
    jackpot.draw().unwrap();
    assert_eq!(
        jackpot.winners_report().unwrap(),
        "            1st ball\n        Solo: 101.00$"
    );
}

#[test]
fn test_shared_handle_runs_the_same_lifecycle() {
    let mut pool = RandomPool::sequential(10, 5, Box::new(ScriptedSource::first_item()));
    let draw = SharedLotteryDraw::new(
        LotteryDraw::new(
            &mut pool,
            2,
            Money::from_units(50),
            Money::from_units(5),
            percentages(),
        )
        .unwrap(),
    );

    assert_eq!(draw.purchase_ticket("Ada").unwrap(), BallNumber(10));
    draw.draw().unwrap();
    assert_eq!(
        draw.drawn_balls_report().unwrap(),
        "Drawn ball: 10\nDrawn ball: 11"
    );
    // Pot 55 → half floored to 27 → 20.25 / 4.05
    assert_eq!(
        draw.winners_report().unwrap(),
        "            1st ball            2nd ball\n         Ada: 20.25$   No winner: 04.05$"
    );
}

#[test]
fn test_winners_serialize_for_external_consumers() {
    let mut pool = RandomPool::sequential(1, 1, Box::new(ScriptedSource::first_item()));
    let mut draw = LotteryDraw::new(
        &mut pool,
        1,
        Money::from_units(20),
        Money::ZERO,
        Box::new(WinnerTakesAll),
    )
    .unwrap();
    draw.purchase_ticket("Ada").unwrap();
    draw.draw().unwrap();

    let json = serde_json::to_value(draw.winners().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "rank": 0, "ball": 1, "participant": "Ada", "prize": 200_000 }
        ])
    );
}
