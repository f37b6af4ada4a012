//! Whole-screen flow driven by keys and timestamps.

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_memory::store::{KeyValueStore, MemoryStore, RANKING_KEY};
use tui_memory::term::{FrameBuffer, Viewport};
use tui_memory::types::{CardState, ResultDisplay};
use tui_memory::{App, AppConfig, Screen};

fn press(app: &mut App<MemoryStore>, code: KeyCode, now: u64) {
    app.handle_key(KeyEvent::from(code), now);
}

fn type_str(app: &mut App<MemoryStore>, s: &str) {
    for ch in s.chars() {
        press(app, KeyCode::Char(ch), 0);
    }
}

fn logged_in(config: &AppConfig, kv: MemoryStore) -> App<MemoryStore> {
    let mut app = App::new(config, kv, 7);
    type_str(&mut app, "Ana");
    press(&mut app, KeyCode::Tab, 0);
    type_str(&mut app, "ACME");
    press(&mut app, KeyCode::Enter, 0);
    assert_eq!(app.screen(), Screen::Playing);
    app
}

/// Move the cursor to `pos` from wherever it is.
fn goto(app: &mut App<MemoryStore>, pos: usize) {
    for _ in 0..4 {
        press(app, KeyCode::Up, 0);
        press(app, KeyCode::Left, 0);
    }
    for _ in 0..pos / 4 {
        press(app, KeyCode::Down, 0);
    }
    for _ in 0..pos % 4 {
        press(app, KeyCode::Right, 0);
    }
    assert_eq!(app.cursor().position(), pos);
}

fn flip(app: &mut App<MemoryStore>, pos: usize, now: u64) {
    goto(app, pos);
    press(app, KeyCode::Char(' '), now);
}

#[test]
fn test_keyboard_play_to_victory_records_ranking() {
    let kv = MemoryStore::new();
    let mut app = logged_in(&AppConfig::default(), kv.clone());

    // Find the pairs from the dealt board, then play them.
    let symbols: Vec<_> = app
        .session()
        .unwrap()
        .board()
        .cards()
        .iter()
        .map(|c| c.symbol)
        .collect();
    let mut done = vec![false; symbols.len()];
    let mut now = 100;
    for a in 0..symbols.len() {
        if done[a] {
            continue;
        }
        let b = (a + 1..symbols.len())
            .find(|&b| symbols[b] == symbols[a])
            .unwrap();
        done[a] = true;
        done[b] = true;
        flip(&mut app, a, now);
        flip(&mut app, b, now + 50);
        now += 1_000;
    }

    assert_eq!(app.screen(), Screen::Result);
    let result = app.result().unwrap();
    assert!(result.message().starts_with("Parabéns! Você venceu com 80 pontos"));
    assert_eq!(result.top().len(), 1);
    assert_eq!(result.top()[0].name, "Ana");
    assert!(kv.get(RANKING_KEY).unwrap().is_some());
}

#[test]
fn test_mismatch_blocks_then_releases() {
    let mut app = logged_in(&AppConfig::default(), MemoryStore::new());
    let board = app.session().unwrap().board().clone();
    let a = 0;
    let b = (1..board.len())
        .find(|&i| board.cards()[i].symbol != board.cards()[a].symbol)
        .unwrap();
    let c = (1..board.len()).find(|&i| i != b).unwrap();

    flip(&mut app, a, 100);
    flip(&mut app, b, 200);
    flip(&mut app, c, 300);
    let state = |app: &App<MemoryStore>, p| app.session().unwrap().board().state(p);
    assert_eq!(state(&app, c), Some(CardState::Hidden));

    app.tick(1_000);
    assert_eq!(state(&app, a), Some(CardState::Hidden));
    flip(&mut app, c, 1_100);
    assert_eq!(state(&app, c), Some(CardState::Revealed));
}

#[test]
fn test_plain_variant_shows_summary_only() {
    let mut config = AppConfig::default();
    config.game.display = ResultDisplay::Plain;
    let kv = MemoryStore::new();
    let mut app = logged_in(&config, kv.clone());

    app.tick(30_000);
    assert_eq!(app.screen(), Screen::Result);
    assert!(app.result().unwrap().top().is_empty());
    assert!(kv.get(RANKING_KEY).unwrap().is_none());
}

#[test]
fn test_restart_and_menu() {
    let mut app = logged_in(&AppConfig::default(), MemoryStore::new());
    flip(&mut app, 0, 100);

    press(&mut app, KeyCode::Char('r'), 5_000);
    assert_eq!(app.screen(), Screen::Playing);
    let s = app.session().unwrap();
    assert!(s.board().cards().iter().all(|c| c.state == CardState::Hidden));
    // The countdown restarts from the restart time.
    assert_eq!(s.remaining_secs(5_000), 30);

    press(&mut app, KeyCode::Esc, 6_000);
    assert_eq!(app.screen(), Screen::Login);
    assert!(app.session().is_none());
    assert_eq!(app.form().name(), "Ana");
    assert_eq!(app.form().contact(), "ACME");
}

#[test]
fn test_result_screen_keys() {
    let export = std::env::temp_dir().join(format!("tui-memory-app-{}", std::process::id()));
    let _ = fs::remove_dir_all(&export);
    let config = AppConfig {
        export_dir: export.clone(),
        ..AppConfig::default()
    };

    let mut app = logged_in(&config, MemoryStore::new());
    app.tick(30_000);
    assert_eq!(app.screen(), Screen::Result);

    press(&mut app, KeyCode::Char('s'), 30_100);
    assert!(app.status().unwrap().starts_with("Dados salvos em"));
    assert!(export.join("dados_jogador.json").exists());

    press(&mut app, KeyCode::Char('r'), 31_000);
    assert_eq!(app.screen(), Screen::Playing);
    app.tick(61_000);
    press(&mut app, KeyCode::Enter, 61_100);
    assert_eq!(app.screen(), Screen::Login);

    let _ = fs::remove_dir_all(&export);
}

#[test]
fn test_quit_keys_per_screen() {
    let mut login = App::new(&AppConfig::default(), MemoryStore::new(), 1);
    type_str(&mut login, "q");
    assert!(!login.should_quit());
    press(&mut login, KeyCode::Esc, 0);
    assert!(login.should_quit());

    let mut game = logged_in(&AppConfig::default(), MemoryStore::new());
    game.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 0);
    assert!(game.should_quit());
}

#[test]
fn test_every_screen_renders() {
    let mut app = logged_in(&AppConfig::default(), MemoryStore::new());
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(0, 0);

    app.render_into(100, vp, &mut fb);
    assert!(fb.text().contains("Pontos: 0"));

    app.tick(30_000);
    app.render_into(30_000, vp, &mut fb);
    assert!(fb.text().contains("Tempo esgotado! Você fez 0 pontos."));

    press(&mut app, KeyCode::Char('m'), 30_100);
    app.render_into(30_100, vp, &mut fb);
    assert!(fb.text().contains("Jogo da Memória"));
}
