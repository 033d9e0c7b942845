//! Rendering tests against ratatui's TestBackend

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use batcomputer::clipboard::Copy;
use batcomputer::console::CommandTable;
use batcomputer::tui::DossierState;
use batcomputer::{Console, ConsoleTiming, Profile};

fn state() -> DossierState {
    let console = Console::new(
        CommandTable::new(Profile::default()),
        ConsoleTiming::default(),
    );
    DossierState::with_copier(console, Copy::with_tools(Vec::new()))
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(state: &DossierState, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| state.render(frame, now, "23:59:59"))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn press(state: &mut DossierState, c: char, now: Instant) {
    state.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
}

#[test]
fn dossier_page_shows_identity_and_sections() {
    let text = draw(&state(), Instant::now());

    assert!(text.contains("BRUCE WAYNE"));
    assert!(text.contains("GOTHAM TIME 23:59:59"));
    assert!(text.contains("IDENTITY"));
    assert!(text.contains("CASE FILES"));
    assert!(text.contains("1 of 6: IDENTITY"));
    assert!(text.contains("copy email"));
}

#[test]
fn console_overlay_renders_banner_and_prompt() {
    let t0 = Instant::now();
    let mut state = state();
    state.set_viewport(ratatui::layout::Rect::new(0, 0, 100, 30));
    for c in "batman".chars() {
        press(&mut state, c, t0);
    }
    let ready = t0 + Duration::from_millis(2000);
    state.tick(ready);

    let text = draw(&state, ready);
    assert!(text.contains("BAT-COMPUTER"));
    assert!(text.contains("AUTHORIZED ACCESS ONLY"));
    assert!(text.contains("BATMAN@GOTHAM:~$"));
    // Markers are rendered as styling, never as text
    assert!(!text.contains("{{"));
}

#[test]
fn console_output_appears_in_overlay() {
    let t0 = Instant::now();
    let mut state = state();
    for c in "batman".chars() {
        press(&mut state, c, t0);
    }
    let ready = t0 + Duration::from_millis(2000);
    state.tick(ready);
    for c in "status".chars() {
        press(&mut state, c, ready);
    }
    state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), ready);
    state.tick(ready + Duration::from_millis(1000));

    let text = draw(&state, ready + Duration::from_millis(1000));
    assert!(text.contains("CHECKING AVAILABILITY"));
    assert!(text.contains("NOTICE PERIOD"));
}

#[test]
fn help_modal_lists_shortcuts() {
    let mut state = state();
    press(&mut state, '?', Instant::now());

    let text = draw(&state, Instant::now());
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Copy email"));
}
