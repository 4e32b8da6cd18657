use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn quit_exits_while_stdin_stays_open() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_formflow"))
        .env("FORMFLOW_LOG", "off")
        .env_remove("FORMFLOW_RULES")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // keep the write end alive so the process never sees EOF
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"id user@sopt.org\nquit\n").unwrap();
    stdin.flush().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break Some(status);
        }
        if Instant::now() > deadline {
            break None;
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    if status.is_none() {
        let _ = child.kill();
    }
    drop(stdin);

    let status = status.expect("formflow still running after quit");
    assert!(status.success());
}
