#![cfg(unix)]
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tour::menu::render;

fn wait_for<F: FnMut() -> bool>(mut done: F) -> bool {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        if done() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_ctrl_c_leaves_piped_session_while_reading() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tour"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // Held open so the read blocks instead of seeing end of input.
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();
    let output = Arc::new(Mutex::new(Vec::new()));
    let collected = output.clone();
    let reader = thread::spawn(move || {
        let mut buf = [0u8; 256];
        while let Ok(n) = stdout.read(&mut buf) {
            if n == 0 {
                break;
            }
            collected.lock().unwrap().extend_from_slice(&buf[..n]);
        }
    });

    let prompted = wait_for(|| {
        String::from_utf8_lossy(&output.lock().unwrap()).ends_with(render::PROMPT)
    });
    assert!(prompted);

    let killed = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .unwrap();
    assert!(killed.success());

    let mut status = None;
    let exited = wait_for(|| {
        status = child.try_wait().unwrap();
        status.is_some()
    });
    if !exited {
        let _ = child.kill();
    }
    assert!(exited);
    assert!(status.unwrap().success());

    reader.join().unwrap();
    let s = String::from_utf8_lossy(&output.lock().unwrap()).into_owned();
    assert!(s.ends_with(&render::input_closed()));
    assert!(!s.contains(&render::goodbye()));
}
