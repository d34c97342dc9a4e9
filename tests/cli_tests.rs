//! Terminal binary tests.
//!
//! These tests run the built `rock-tcg` binary as a child process:
//! - Ctrl-C while waiting for input prints the farewell and exits 0
//! - Closing input ends the match cleanly

#![cfg(unix)]

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

const BIN: &str = env!("CARGO_BIN_EXE_rock-tcg");

/// Spawn the game with a fixed seed and no pacing, stdin held open.
fn spawn_game() -> Child {
    Command::new(BIN)
        .args(["--seed", "1", "--delay-ms", "0"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("binary starts")
}

/// Collect the child's stdout on a background thread.
fn capture_stdout(child: &mut Child) -> Arc<Mutex<String>> {
    let mut stdout = child.stdout.take().expect("stdout is piped");
    let output = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&output);
    thread::spawn(move || {
        let mut buf = [0u8; 1024];
        while let Ok(n) = stdout.read(&mut buf) {
            if n == 0 {
                break;
            }
            sink.lock()
                .unwrap()
                .push_str(&String::from_utf8_lossy(&buf[..n]));
        }
    });
    output
}

fn wait_for_text(output: &Mutex<String>, text: &str, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if output.lock().unwrap().contains(text) {
            return true;
        }
        thread::sleep(Duration::from_millis(20));
    }
    false
}

fn wait_for_exit(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(20));
    }
    let _ = child.kill();
    None
}

/// SIGINT at the first prompt says goodbye and exits successfully.
#[test]
fn test_interrupt_at_prompt_exits_cleanly() {
    let mut child = spawn_game();
    let output = capture_stdout(&mut child);

    assert!(
        wait_for_text(&output, "Enter card number", Duration::from_secs(10)),
        "no prompt: {}",
        output.lock().unwrap()
    );

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("kill runs");
    assert!(sent.success());

    let status = wait_for_exit(&mut child, Duration::from_secs(5))
        .expect("interrupted game should exit");
    assert!(status.success(), "exit status {status:?}");
    assert!(wait_for_text(
        &output,
        "Game interrupted. Thanks for playing!",
        Duration::from_secs(2)
    ));
    drop(child.stdin.take());
}

/// End of input during setup ends the match with the quit message.
#[test]
fn test_closed_input_quits() {
    let mut child = spawn_game();
    let output = capture_stdout(&mut child);
    drop(child.stdin.take());

    let status = wait_for_exit(&mut child, Duration::from_secs(10)).expect("game exits");
    assert!(status.success());
    assert!(wait_for_text(
        &output,
        "Game ended by player. Thanks for playing!",
        Duration::from_secs(2)
    ));
}
