//! Screen flow: login, game, result.
//!
//! [`App`] owns everything the binary drives: the stored profile, the result
//! reporter, the current session and the UI state of each screen. It never
//! reads the clock or the terminal itself, so the whole flow can be tested by
//! feeding keys and millisecond timestamps.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::AppConfig;
use crate::core::{
    GameConfig, GameSession, OutcomeSink, PlainReporter, PlayerIdentity, ResultView, SimpleRng,
};
use crate::input::{handle_key_event, should_quit, BoardCursor, FormEvent, LoginForm};
use crate::store::{KeyValueStore, ProfileStore, RankedReporter, RankingStore};
use crate::term::{FrameBuffer, GameView, LoginView, ResultScreen, Viewport};
use crate::types::{GameAction, ResultDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Playing,
    Result,
}

pub struct App<S> {
    game: GameConfig,
    export_dir: PathBuf,
    profiles: ProfileStore<S>,
    reporter: Box<dyn OutcomeSink>,
    rng: SimpleRng,

    screen: Screen,
    form: LoginForm,
    player: Option<PlayerIdentity>,
    session: Option<GameSession>,
    cursor: BoardCursor,
    result: Option<ResultView>,
    status: Option<String>,

    /// Bumped on every visible change outside the board snapshot.
    revision: u64,
    quit: bool,
}

impl<S: KeyValueStore + Clone + 'static> App<S> {
    pub fn new(config: &AppConfig, kv: S, seed: u32) -> Self {
        let game = config.game.clone();
        let reporter: Box<dyn OutcomeSink> = match game.display {
            ResultDisplay::Plain => Box::new(PlainReporter),
            ResultDisplay::Ranked => Box::new(RankedReporter::new(RankingStore::new(
                kv.clone(),
                game.ranking_cap,
            ))),
        };
        let profiles = ProfileStore::new(kv);
        let form = prefilled_form(&profiles, &game);

        Self {
            game,
            export_dir: config.export_dir.clone(),
            profiles,
            reporter,
            rng: SimpleRng::new(seed),
            screen: Screen::Login,
            form,
            player: None,
            session: None,
            cursor: BoardCursor::default(),
            result: None,
            status: None,
            revision: 0,
            quit: false,
        }
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn player(&self) -> Option<&PlayerIdentity> {
        self.player.as_ref()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn cursor(&self) -> &BoardCursor {
        &self.cursor
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        self.revision += 1;
        match self.screen {
            Screen::Login => self.login_key(key, now_ms),
            Screen::Playing => self.game_key(key, now_ms),
            Screen::Result => self.result_key(key, now_ms),
        }
    }

    /// Advance the running session, if any.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(session) = self.session.as_mut() {
            let out = session.tick(now_ms);
            if out.ended.is_some() {
                self.finish_session();
            }
        }
    }

    /// Change detector for render throttling.
    pub fn fingerprint(&self, now_ms: u64) -> u64 {
        let board = match (self.screen, &self.session) {
            (Screen::Playing, Some(s)) => s.fingerprint(now_ms),
            _ => 0,
        };
        board ^ self.revision.rotate_left(32) ^ self.cursor.position() as u64
    }

    pub fn render_into(&self, now_ms: u64, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.screen, &self.session, &self.result) {
            (Screen::Playing, Some(session), _) => {
                let snap = session.snapshot(now_ms);
                GameView::default().render_into(&snap, Some(self.cursor.position()), viewport, fb);
            }
            (Screen::Result, _, Some(result)) => {
                ResultScreen.render_into(result, self.status.as_deref(), viewport, fb);
            }
            _ => LoginView::new(self.game.pair_count(), self.game.time_budget_secs)
                .render_into(&self.form, viewport, fb),
        }
    }

    fn login_key(&mut self, key: KeyEvent, now_ms: u64) {
        match self.form.handle_key(key) {
            FormEvent::Quit => self.quit = true,
            FormEvent::Submit => self.submit_login(now_ms),
            FormEvent::Edited | FormEvent::None => {}
        }
    }

    fn submit_login(&mut self, now_ms: u64) {
        match PlayerIdentity::validate(self.form.name(), self.form.contact(), self.form.kind()) {
            Ok(identity) => {
                log::info!("login: {:?}", identity.name());
                self.form.clear_error();
                self.profiles.remember(&identity);
                self.player = Some(identity);
                self.start_session(now_ms);
            }
            Err(e) => {
                log::debug!("login rejected: {e}");
                self.form.set_error(e.to_string());
            }
        }
    }

    fn start_session(&mut self, now_ms: u64) {
        let Some(player) = self.player.as_ref() else {
            self.screen = Screen::Login;
            return;
        };
        match GameSession::start(&self.game, player.name(), &mut self.rng, now_ms) {
            Ok(session) => {
                self.session = Some(session);
                self.cursor.reset();
                self.result = None;
                self.status = None;
                self.screen = Screen::Playing;
            }
            Err(e) => {
                log::error!("cannot deal a board: {e}");
                self.form.set_error(e.to_string());
                self.session = None;
                self.screen = Screen::Login;
            }
        }
    }

    fn game_key(&mut self, key: KeyEvent, now_ms: u64) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        let Some(action) = handle_key_event(key) else {
            return;
        };
        match action {
            GameAction::Move(dir) => {
                self.cursor.apply(dir);
            }
            GameAction::Flip => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                session.reveal(self.cursor.position(), now_ms);
                // A reveal can end the session by victory or by a late timeout.
                if session.is_ended() {
                    self.finish_session();
                }
            }
            GameAction::Restart => {
                log::info!("restart requested");
                self.start_session(now_ms);
            }
            GameAction::Menu => self.back_to_login(),
        }
    }

    fn result_key(&mut self, key: KeyEvent, now_ms: u64) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                self.back_to_login()
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.start_session(now_ms),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_and_export(),
            _ => {}
        }
    }

    fn save_and_export(&mut self) {
        let status = match self.profiles.save_and_export(
            self.form.name(),
            self.form.contact(),
            self.form.kind(),
            &self.export_dir,
        ) {
            Ok(path) => format!("Dados salvos em {}", path.display()),
            Err(e) => {
                log::warn!("export failed: {e}");
                "Não foi possível salvar os dados.".to_string()
            }
        };
        self.status = Some(status);
    }

    /// Collect the result of the ended session and show it.
    fn finish_session(&mut self) {
        let Some(result) = self.session.as_mut().and_then(GameSession::take_result) else {
            return;
        };
        self.result = Some(self.reporter.report(&result));
        self.status = None;
        self.screen = Screen::Result;
        self.revision += 1;
    }

    fn back_to_login(&mut self) {
        self.session = None;
        self.result = None;
        self.status = None;
        self.form = prefilled_form(&self.profiles, &self.game);
        self.screen = Screen::Login;
    }
}

fn prefilled_form<S: KeyValueStore>(profiles: &ProfileStore<S>, game: &GameConfig) -> LoginForm {
    let stored = profiles.load();
    LoginForm::new(game.contact).with_values(
        &stored.name,
        stored.contact(game.contact).unwrap_or_default(),
    )
}
