//! End-to-end console sessions driven by an explicit clock

use std::time::{Duration, Instant};

use batcomputer::console::{Command, CommandTable, ACTIVATION_PHRASE};
use batcomputer::{Console, ConsoleTiming, Profile};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn console() -> Console {
    Console::new(
        CommandTable::new(Profile::default()),
        ConsoleTiming::default(),
    )
}

fn submit(console: &mut Console, text: &str, now: Instant) {
    for c in text.chars() {
        console.type_char(c, now);
    }
    console.submit(now);
}

#[test]
fn phrase_whoami_exit_session() {
    let t0 = Instant::now();
    let mut console = console();

    for (i, c) in "the batman".chars().enumerate() {
        console.handle_page_key(c, false, t0 + ms(i as u64));
    }
    assert!(console.is_open());

    // Banner and focus delay
    let ready = t0 + ms(2000);
    console.tick(ready);
    assert!(console.is_input_focused(ready));
    let banner_len = console.output().len();

    submit(&mut console, "whoami", ready);
    let expected = console.table().lines(Command::Whoami);

    // Record when each line first shows up
    let mut arrivals = Vec::new();
    let mut seen = banner_len;
    for step in 0..=expected.len() as u64 * 2 + 2 {
        let now = ready + ms(step * 20);
        console.tick(now);
        while seen < console.output().len() {
            arrivals.push(now);
            seen += 1;
        }
    }
    let added = &console.output()[banner_len..];
    assert!(added[0].plain_text().ends_with("whoami"));
    assert_eq!(&added[1..=expected.len()], expected.as_slice());
    assert!(added[expected.len() + 1].is_blank());
    // echo, response lines, trailing blank
    assert_eq!(arrivals.len(), expected.len() + 2);
    assert!(arrivals[1..=expected.len()].windows(2).all(|w| w[0] < w[1]));

    let later = ready + ms(2000);
    console.tick(later);
    submit(&mut console, "exit", later);
    console.tick(later + ms(200));

    assert!(!console.is_open());
    assert!(console.output().is_empty());
    assert!(console.input().is_empty());
}

#[test]
fn help_is_identical_across_dispatches() {
    let table = CommandTable::new(Profile::default());
    let first = table.dispatch("help").unwrap().lines;
    let second = table.dispatch("  HELP ").unwrap().lines;

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn near_misses_never_open() {
    let t0 = Instant::now();
    let mut console = console();
    for c in "batma batmen batmn btman".chars() {
        console.handle_page_key(c, false, t0);
    }
    assert!(!console.is_open());

    for c in ACTIVATION_PHRASE.to_lowercase().chars() {
        console.handle_page_key(c, false, t0);
    }
    assert!(console.is_open());
}

#[test]
fn console_can_reopen_after_exit() {
    let t0 = Instant::now();
    let mut console = console();
    console.open(t0);
    let ready = t0 + ms(2000);
    console.tick(ready);
    submit(&mut console, "exit", ready);
    console.tick(ready + ms(500));
    assert!(!console.is_open());

    for c in "batman".chars() {
        console.handle_page_key(c, false, ready + ms(600));
    }
    assert!(console.is_open());
    console.tick(ready + ms(600));
    assert_eq!(console.output().len(), 1);
}
