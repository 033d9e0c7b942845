//! Command console session.
//!
//! `Console` owns all state of the hidden terminal: whether it is open, the
//! activation window, the input line, the output panel and the render queue.
//! Time is always passed in by the caller, which keeps every transition
//! deterministic under test.

use std::time::{Duration, Instant};

use tracing::debug;

use super::activation::ActivationBuffer;
use super::commands::{welcome_steps, CommandTable, Effect};
use super::line::DisplayLine;
use super::render::{staggered, RenderQueue, SequenceId};

/// Delays that shape the console's animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleTiming {
    /// Stagger between response lines
    pub line_interval: Duration,
    /// Delay between opening and the input accepting keystrokes
    pub focus_delay: Duration,
    /// Delay between `exit` and the console closing
    pub exit_delay: Duration,
}

impl Default for ConsoleTiming {
    fn default() -> Self {
        Self {
            line_interval: Duration::from_millis(40),
            focus_delay: Duration::from_millis(300),
            exit_delay: Duration::from_millis(200),
        }
    }
}

/// The hidden command console.
#[derive(Debug)]
pub struct Console {
    table: CommandTable,
    timing: ConsoleTiming,
    enabled: bool,
    open: bool,
    activation: ActivationBuffer,
    input: String,
    output: Vec<DisplayLine>,
    /// Lines scrolled up from the bottom of the output panel
    scroll_back: usize,
    queue: RenderQueue,
    focus_at: Option<Instant>,
    /// Response of a submitted `exit`; the close is armed once it has rendered
    exit_sequence: Option<SequenceId>,
    close_at: Option<Instant>,
}

impl Console {
    pub fn new(table: CommandTable, timing: ConsoleTiming) -> Self {
        Self {
            table,
            timing,
            enabled: true,
            open: false,
            activation: ActivationBuffer::new(),
            input: String::new(),
            output: Vec::new(),
            scroll_back: 0,
            queue: RenderQueue::new(),
            focus_at: None,
            exit_sequence: None,
            close_at: None,
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn timing(&self) -> ConsoleTiming {
        self.timing
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &[DisplayLine] {
        &self.output
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// True while response lines are still waiting to be appended.
    pub fn is_rendering(&self) -> bool {
        !self.queue.is_idle()
    }

    /// True when every line of `sequence` has been appended or cancelled.
    pub fn is_finished(&self, sequence: SequenceId) -> bool {
        self.queue.is_finished(sequence)
    }

    /// Number of characters currently held in the activation window.
    pub fn activation_len(&self) -> usize {
        self.activation.len()
    }

    /// Whether the input line accepts keystrokes at `now`.
    pub fn is_input_focused(&self, now: Instant) -> bool {
        self.open && self.focus_at.is_some_and(|at| now >= at)
    }

    /// Enable or disable the console.
    ///
    /// A disabled console ignores the activation phrase; disabling an open
    /// console closes it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            debug!("console disabled");
            self.close();
            self.activation.reset();
        }
    }

    /// Feed a keystroke typed on the page (outside the console).
    ///
    /// Keystrokes are ignored while the console is open, disabled, or while
    /// a page text input has focus. Returns true if the console opened.
    pub fn handle_page_key(&mut self, c: char, text_input_focused: bool, now: Instant) -> bool {
        if self.open || !self.enabled || text_input_focused {
            return false;
        }
        if self.activation.push(c) {
            self.open(now);
            return true;
        }
        false
    }

    /// Open the console and queue the welcome banner.
    pub fn open(&mut self, now: Instant) {
        if self.open || !self.enabled {
            return;
        }
        debug!("console opened");
        self.open = true;
        self.activation.reset();
        self.scroll_back = 0;
        self.focus_at = Some(now + self.timing.focus_delay);
        self.queue.enqueue(now, welcome_steps());
    }

    /// Close the console, discarding output, input and pending lines.
    pub fn close(&mut self) {
        if self.open {
            debug!(pending = self.queue.pending(), "console closed");
        }
        self.open = false;
        self.queue.cancel();
        self.output.clear();
        self.input.clear();
        self.scroll_back = 0;
        self.focus_at = None;
        self.exit_sequence = None;
        self.close_at = None;
        self.activation.reset();
    }

    /// Type one character into the input line.
    pub fn type_char(&mut self, c: char, now: Instant) {
        if self.is_input_focused(now) {
            self.input.push(c);
        }
    }

    /// Delete the last character of the input line.
    pub fn backspace(&mut self, now: Instant) {
        if self.is_input_focused(now) {
            self.input.pop();
        }
    }

    /// Submit the input line.
    ///
    /// The input is always cleared. Blank input renders nothing. Otherwise
    /// the command's effect is applied at once and its lines are queued
    /// behind any response that is still rendering. Returns the sequence of
    /// the queued response.
    pub fn submit(&mut self, now: Instant) -> Option<SequenceId> {
        if !self.is_input_focused(now) {
            return None;
        }
        self.tick(now);

        let raw = std::mem::take(&mut self.input);
        let dispatch = self.table.dispatch(&raw)?;
        debug!(input = %dispatch.input, known = dispatch.command.is_some(), "console dispatch");

        let mut steps = Vec::with_capacity(dispatch.lines.len() + 2);
        let closes = dispatch.effect == Effect::ScheduleClose;
        match dispatch.effect {
            Effect::ClearOutput => {
                self.queue.cancel();
                self.output.clear();
                self.scroll_back = 0;
            }
            Effect::ScheduleClose | Effect::None => steps.push((dispatch.echo, Duration::ZERO)),
        }
        steps.extend(staggered(dispatch.lines, self.timing.line_interval));
        steps.push((DisplayLine::blank(), Duration::ZERO));

        let sequence = self.queue.enqueue(now, steps);
        if closes && self.exit_sequence.is_none() {
            self.exit_sequence = Some(sequence);
        }
        self.tick(now);
        Some(sequence)
    }

    /// Advance the console to `now`: fire a due close, then append due lines.
    ///
    /// The exit delay starts once the `exit` acknowledgement has been
    /// appended, so it is never closed away behind an earlier response.
    pub fn tick(&mut self, now: Instant) {
        if self.close_at.is_some_and(|at| now >= at) {
            self.close();
            return;
        }
        if !self.open {
            return;
        }
        let lines = self.queue.poll(now);
        if !lines.is_empty() {
            self.output.extend(lines);
            self.scroll_back = 0;
        }
        if self.close_at.is_none()
            && self.exit_sequence.is_some_and(|seq| self.queue.is_finished(seq))
        {
            debug!("exit acknowledged, closing");
            self.close_at = Some(now + self.timing.exit_delay);
        }
    }

    /// Earliest instant at which `tick` has something to do.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        [
            self.queue.next_due(),
            self.close_at,
            self.focus_at.filter(|at| *at > now),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Scroll the output panel towards older lines.
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = (self.scroll_back + lines).min(self.output.len());
    }

    /// Scroll the output panel towards the newest line.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::commands::Command;
    use crate::profile::Profile;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn console() -> Console {
        Console::new(
            CommandTable::new(Profile::default()),
            ConsoleTiming::default(),
        )
    }

    /// Open at `t0` and wait for the banner and focus; returns the ready time.
    fn open_ready(console: &mut Console, t0: Instant) -> Instant {
        console.open(t0);
        let ready = t0 + ms(2000);
        console.tick(ready);
        ready
    }

    fn type_line(console: &mut Console, text: &str, now: Instant) {
        for c in text.chars() {
            console.type_char(c, now);
        }
    }

    #[test]
    fn starts_closed_and_empty() {
        let console = console();
        assert!(!console.is_open());
        assert!(console.output().is_empty());
        assert!(console.input().is_empty());
    }

    #[test]
    fn activation_phrase_opens_console() {
        let t0 = Instant::now();
        let mut console = console();
        let opened: Vec<bool> = "batman"
            .chars()
            .map(|c| console.handle_page_key(c, false, t0))
            .collect();
        assert_eq!(opened, vec![false, false, false, false, false, true]);
        assert!(console.is_open());
        assert_eq!(console.activation_len(), 0);
    }

    #[test]
    fn focused_text_input_blocks_activation() {
        let t0 = Instant::now();
        let mut console = console();
        for c in "batman".chars() {
            console.handle_page_key(c, true, t0);
        }
        assert!(!console.is_open());
        assert_eq!(console.activation_len(), 0);
    }

    #[test]
    fn disabled_console_ignores_activation() {
        let t0 = Instant::now();
        let mut console = console();
        console.set_enabled(false);
        for c in "batman".chars() {
            console.handle_page_key(c, false, t0);
        }
        assert!(!console.is_open());
    }

    #[test]
    fn disabling_open_console_closes_it() {
        let t0 = Instant::now();
        let mut console = console();
        open_ready(&mut console, t0);
        console.set_enabled(false);
        assert!(!console.is_open());
        assert!(console.output().is_empty());
    }

    #[test]
    fn welcome_banner_renders_staggered() {
        let t0 = Instant::now();
        let mut console = console();
        console.open(t0);
        console.tick(t0);
        assert_eq!(console.output().len(), 1);
        console.tick(t0 + ms(79));
        assert_eq!(console.output().len(), 1);
        console.tick(t0 + ms(80));
        assert_eq!(console.output().len(), 2);
        // each delay counts from the previous line
        console.tick(t0 + ms(199));
        assert_eq!(console.output().len(), 2);
        console.tick(t0 + ms(200));
        assert_eq!(console.output().len(), 3);
        console.tick(t0 + ms(1539));
        assert_eq!(console.output().len(), 7);
        console.tick(t0 + ms(1540));
        assert_eq!(console.output().len(), 8);
    }

    #[test]
    fn keystrokes_before_focus_are_dropped() {
        let t0 = Instant::now();
        let mut console = console();
        console.open(t0);
        console.type_char('x', t0 + ms(100));
        assert!(console.input().is_empty());
        console.type_char('y', t0 + ms(300));
        assert_eq!(console.input(), "y");
    }

    #[test]
    fn blank_submit_clears_input_and_renders_nothing() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        let before = console.output().len();

        type_line(&mut console, "   ", now);
        assert!(console.submit(now).is_none());
        console.tick(now + ms(1000));

        assert!(console.input().is_empty());
        assert_eq!(console.output().len(), before);
    }

    #[test]
    fn unknown_command_renders_one_line_and_stays_open() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        let before = console.output().len();

        type_line(&mut console, "xyz123", now);
        console.submit(now);
        console.tick(now + ms(1000));

        let added = &console.output()[before..];
        // echo, not-found line, trailing blank
        assert_eq!(added.len(), 3);
        assert!(added[1].text.contains("xyz123"));
        assert!(added[2].is_blank());
        assert!(console.is_open());
    }

    #[test]
    fn response_lines_arrive_in_order_on_schedule() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        let before = console.output().len();

        type_line(&mut console, "whoami", now);
        console.submit(now);
        // echo and first response line at dispatch
        assert_eq!(console.output().len(), before + 2);
        console.tick(now + ms(39));
        assert_eq!(console.output().len(), before + 2);
        console.tick(now + ms(40));
        assert_eq!(console.output().len(), before + 3);

        console.tick(now + ms(1000));
        let expected = console.table().lines(Command::Whoami);
        let added = &console.output()[before..];
        assert_eq!(&added[1..added.len() - 1], expected.as_slice());
    }

    #[test]
    fn overlapping_submissions_do_not_interleave() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        let before = console.output().len();

        type_line(&mut console, "skills", now);
        let first = console.submit(now).unwrap();
        type_line(&mut console, "status", now + ms(10));
        let second = console.submit(now + ms(10)).unwrap();
        assert!(!console.is_finished(first));

        console.tick(now + ms(5000));
        assert!(console.is_finished(first));
        assert!(console.is_finished(second));

        let added: Vec<String> = console.output()[before..]
            .iter()
            .map(|l| l.plain_text())
            .collect();
        let skills_echo = added.iter().position(|t| t.ends_with("skills")).unwrap();
        let status_echo = added.iter().position(|t| t.ends_with("status")).unwrap();
        // skills: echo + 10 lines + blank, then status starts
        assert_eq!(skills_echo, 0);
        assert_eq!(status_echo, 12);
    }

    #[test]
    fn clear_empties_panel_even_mid_render() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);

        type_line(&mut console, "skills", now);
        console.submit(now);
        assert!(console.is_rendering());

        let later = now + ms(50);
        type_line(&mut console, "clear", later);
        console.submit(later);

        assert_eq!(console.output(), &[DisplayLine::blank()]);
        console.tick(later + ms(5000));
        assert_eq!(console.output(), &[DisplayLine::blank()]);
    }

    #[test]
    fn exit_closes_after_delay() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);

        type_line(&mut console, "exit", now);
        console.submit(now);
        assert!(console
            .output()
            .iter()
            .any(|l| l.text.contains("Closing secure channel")));

        console.tick(now + ms(199));
        assert!(console.is_open());
        console.tick(now + ms(200));
        assert!(!console.is_open());
        assert!(console.output().is_empty());
        assert!(console.input().is_empty());
    }

    #[test]
    fn exit_queued_behind_response_is_acknowledged_before_closing() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);

        type_line(&mut console, "skills", now);
        console.submit(now);
        type_line(&mut console, "exit", now + ms(10));
        console.submit(now + ms(10));

        let mut acked_at = None;
        let mut closed_at = None;
        for step in 0..400 {
            let at = now + ms(10 + step * 5);
            console.tick(at);
            if !console.is_open() {
                closed_at = Some(at);
                break;
            }
            if acked_at.is_none()
                && console
                    .output()
                    .iter()
                    .any(|l| l.text.contains("Closing secure channel"))
            {
                acked_at = Some(at);
            }
        }

        let acked_at = acked_at.expect("exit acknowledgement was never shown");
        let closed_at = closed_at.expect("console never closed");
        assert!(closed_at >= acked_at + ms(200));
        assert!(closed_at <= acked_at + ms(205));
    }

    #[test]
    fn echo_shows_marker_input_verbatim() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        let before = console.output().len();

        type_line(&mut console, "{{zz", now);
        console.submit(now);
        type_line(&mut console, "a}}b", now);
        console.submit(now);
        console.tick(now + ms(1000));

        let added: Vec<String> = console.output()[before..]
            .iter()
            .map(|l| l.plain_text())
            .collect();
        assert!(added[0].ends_with(" {{zz"));
        assert_eq!(added[1], "> Command not found: \"{{zz\". Type help.");
        assert!(added[3].ends_with(" a}}b"));
        assert_eq!(added[4], "> Command not found: \"a}}b\". Type help.");
    }

    #[test]
    fn close_mid_render_appends_nothing_afterwards() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);

        type_line(&mut console, "skills", now);
        console.submit(now);
        console.tick(now + ms(40));
        assert!(console.is_rendering());

        console.close();
        for step in 1..50 {
            console.tick(now + ms(step * 40));
        }
        assert!(console.output().is_empty());
        assert!(!console.is_rendering());
    }

    #[test]
    fn reopen_starts_fresh_session() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);
        type_line(&mut console, "help", now);
        console.submit(now);
        console.close();

        let t1 = now + ms(10_000);
        for c in "BATMAN".chars() {
            console.handle_page_key(c, false, t1);
        }
        console.tick(t1 + ms(2000));
        assert!(console.is_open());
        let banner: Vec<DisplayLine> = welcome_steps().into_iter().map(|(l, _)| l).collect();
        assert_eq!(console.output(), banner.as_slice());
    }

    #[test]
    fn page_keys_are_ignored_while_open() {
        let t0 = Instant::now();
        let mut console = console();
        open_ready(&mut console, t0);
        assert!(!console.handle_page_key('b', false, t0));
        assert_eq!(console.activation_len(), 0);
    }

    #[test]
    fn scroll_is_clamped_and_reset_by_new_lines() {
        let t0 = Instant::now();
        let mut console = console();
        let now = open_ready(&mut console, t0);

        console.scroll_up(100);
        assert_eq!(console.scroll_back(), console.output().len());
        console.scroll_down(3);
        assert_eq!(console.scroll_back(), console.output().len() - 3);

        type_line(&mut console, "status", now);
        console.submit(now);
        assert_eq!(console.scroll_back(), 0);
    }

    #[test]
    fn next_deadline_tracks_pending_work() {
        let t0 = Instant::now();
        let mut console = console();
        assert_eq!(console.next_deadline(t0), None);

        console.open(t0);
        assert_eq!(console.next_deadline(t0), Some(t0));
        console.tick(t0);
        assert_eq!(console.next_deadline(t0), Some(t0 + ms(80)));
    }
}
