use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use story_core::{update, AppState, Msg};
use story_engine::{EngineHandle, PreferenceStore};
use story_logging::{dispatch_seq, next_dispatch_seq, story_debug, story_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence;
use super::ui::constants::HELP_TEXT;
use super::ui::input::{parse_line, UserCommand};
use super::ui::render::render;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    story_info!("Starting story_search with api_base={}", config.api_base);

    let (prefs, search_term) =
        persistence::restore_search_term(&config.preferences_path, &config.default_search_term);
    let state = AppState::with_api_base(config.api_base.clone(), search_term)
        .with_client_filter(config.client_filter);
    let engine = EngineHandle::new(config.fetch_settings());

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_stdin_reader(event_tx.clone());

    let stdout = io::stdout();
    let mut app = App::new(state, engine, prefs, event_tx, stdout.lock());
    app.run(event_rx)
}

/// Everything the main loop reacts to.
#[derive(Debug)]
enum AppEvent {
    Msg(Msg),
    Command(UserCommand),
    InputClosed,
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Command(parse_line(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn new(
        state: AppState,
        engine: EngineHandle,
        prefs: Box<dyn PreferenceStore>,
        event_tx: mpsc::Sender<AppEvent>,
        out: W,
    ) -> Self {
        let effects = EffectRunner::new(engine, prefs, move |msg| {
            event_tx.send(AppEvent::Msg(msg)).is_ok()
        });
        Self {
            state,
            effects,
            out,
        }
    }

    fn run(&mut self, event_rx: mpsc::Receiver<AppEvent>) -> anyhow::Result<()> {
        self.render().context("failed to draw initial screen")?;
        self.dispatch(Msg::Mounted)?;

        while let Ok(event) = event_rx.recv() {
            let keep_going = match event {
                AppEvent::Msg(msg) => {
                    self.dispatch(msg)?;
                    true
                }
                AppEvent::Command(command) => self.handle_command(command)?,
                AppEvent::InputClosed => false,
            };
            if !keep_going {
                break;
            }
        }
        story_info!("Exiting after {} dispatches", dispatch_seq());
        Ok(())
    }

    /// Returns false when the user asked to quit.
    fn handle_command(&mut self, command: UserCommand) -> anyhow::Result<bool> {
        match command {
            UserCommand::Input(term) => self.dispatch(Msg::SearchInput(term))?,
            UserCommand::Submit => self.dispatch(Msg::SearchSubmitted)?,
            UserCommand::Dismiss(position) => {
                let view = self.state.view();
                let target = position
                    .checked_sub(1)
                    .and_then(|index| view.stories.get(index))
                    .map(|row| row.story.clone());
                match target {
                    Some(story) => self.dispatch(Msg::RemoveStory(story))?,
                    None => self.say(&format!("No story #{position} on screen."))?,
                }
            }
            UserCommand::Help => self.say(HELP_TEXT)?,
            UserCommand::Quit => return Ok(false),
            UserCommand::Invalid(reason) => self.say(&format!("{reason} (try /help)"))?,
        }
        Ok(true)
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let seq = next_dispatch_seq();
        story_debug!("dispatch seq={} msg={:?}", seq, msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.effects.run(effects);
        if was_dirty {
            self.render().context("failed to redraw")?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let screen = render(&self.state.view());
        writeln!(self.out, "\n{screen}")?;
        self.out.flush()
    }

    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use story_core::{ObjectId, Story};
    use story_engine::{FetchError, MemoryPreferenceStore, StoryFetcher};

    use super::*;

    struct FixedFetcher;

    #[async_trait::async_trait]
    impl StoryFetcher for FixedFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<Story>, FetchError> {
            Ok(vec![story(0, "React"), story(1, "Redux")])
        }
    }

    fn story(id: u64, title: &str) -> Story {
        Story {
            title: title.to_string(),
            url: String::new(),
            author: "a".to_string(),
            num_comments: 2,
            points: 1,
            object_id: ObjectId::Number(id),
        }
    }

    fn app_with_events() -> (App<Vec<u8>>, mpsc::Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let app = App::new(
            AppState::new(""),
            EngineHandle::with_fetcher(Arc::new(FixedFetcher)),
            Box::new(MemoryPreferenceStore::new()),
            event_tx,
            Vec::new(),
        );
        (app, event_rx)
    }

    fn deliver_next_msg(app: &mut App<Vec<u8>>, event_rx: &mpsc::Receiver<AppEvent>) {
        match event_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::Msg(msg)) => app.dispatch(msg).unwrap(),
            other => panic!("expected engine message, got {other:?}"),
        }
    }

    #[test]
    fn mount_fetches_and_renders_list() {
        let (mut app, event_rx) = app_with_events();

        app.dispatch(Msg::Mounted).unwrap();
        deliver_next_msg(&mut app, &event_rx);

        let screen = String::from_utf8(app.out.clone()).unwrap();
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("  1. React | a | 2 comments | 1 points"));
        assert!(screen.contains("Showing 2 of 2 stories, 4 comments in total."));
    }

    #[test]
    fn dismiss_uses_visible_position() {
        let (mut app, event_rx) = app_with_events();
        app.dispatch(Msg::Mounted).unwrap();
        deliver_next_msg(&mut app, &event_rx);

        assert!(app.handle_command(UserCommand::Dismiss(2)).unwrap());
        let titles: Vec<_> = app
            .state
            .view()
            .stories
            .into_iter()
            .map(|row| row.story.title)
            .collect();
        assert_eq!(titles, vec!["React"]);

        app.out.clear();
        assert!(app.handle_command(UserCommand::Dismiss(5)).unwrap());
        let screen = String::from_utf8(app.out.clone()).unwrap();
        assert_eq!(screen, "No story #5 on screen.\n");
    }

    #[test]
    fn clearing_the_term_shows_every_row_again() {
        let (mut app, event_rx) = app_with_events();
        app.dispatch(Msg::Mounted).unwrap();
        deliver_next_msg(&mut app, &event_rx);

        app.handle_command(parse_line("nothing matches")).unwrap();
        assert!(app.state.view().stories.is_empty());

        app.handle_command(parse_line("/clear")).unwrap();
        let view = app.state.view();
        assert_eq!(view.search_term, "");
        assert_eq!(view.stories.len(), 2);
    }

    #[test]
    fn slash_leading_term_becomes_the_search_term() {
        let (mut app, _event_rx) = app_with_events();

        app.handle_command(parse_line("/term /r/rust")).unwrap();

        assert_eq!(app.state.search_term(), "/r/rust");
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut app, _event_rx) = app_with_events();

        assert!(!app.handle_command(UserCommand::Quit).unwrap());
    }
}
