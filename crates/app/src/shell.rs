//! Operator command loop
//!
//! The view/controller shell: reads operator intents from stdin, dispatches
//! them into the console, and re-derives the printed view from current
//! state after each mutation.

use std::io::{self, BufRead, Write as _};

use crewdeck_core::{Department, IntercomState, MessageKind, Target, TaskStatus};

use crate::audio::{AudioCapture, AudioPlayback, ConsoleSpeaker, SimulatedMic};
use crate::state::AppState;
use crate::viewmodel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        department: Department,
        key: String,
        name: String,
    },
    Logout,
    Channel(Target),
    Say(String),
    To { target: Target, content: String },
    PushToTalk,
    Chat,
    Tasks,
    Task { index: usize, status: TaskStatus },
    Status,
    Alert,
    Dump,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let trimmed = line.trim();
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (trimmed, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "login" => {
                let mut parts = rest.splitn(3, char::is_whitespace);
                let dept = parts.next().unwrap_or("");
                let key = parts.next().unwrap_or("");
                let name = parts.next().unwrap_or("").trim();
                if dept.is_empty() || key.is_empty() {
                    return Err("usage: login <dept> <key> <display name>".to_string());
                }
                let department = Department::parse(dept)
                    .ok_or_else(|| format!("unknown department: {dept}"))?;
                Ok(Command::Login {
                    department,
                    key: key.to_string(),
                    name: name.to_string(),
                })
            }
            "logout" => Ok(Command::Logout),
            "channel" => {
                let target = Target::parse(rest)
                    .ok_or_else(|| format!("unknown channel: {rest}"))?;
                Ok(Command::Channel(target))
            }
            "say" => {
                if rest.is_empty() {
                    return Err("usage: say <message>".to_string());
                }
                Ok(Command::Say(rest.to_string()))
            }
            "to" => {
                let (target, content) = match rest.split_once(char::is_whitespace) {
                    Some((t, c)) => (t, c.trim()),
                    None => return Err("usage: to <dept|ALL> <message>".to_string()),
                };
                let target = Target::parse(target)
                    .ok_or_else(|| format!("unknown target: {target}"))?;
                if content.is_empty() {
                    return Err("usage: to <dept|ALL> <message>".to_string());
                }
                Ok(Command::To {
                    target,
                    content: content.to_string(),
                })
            }
            "ptt" | "talk" => Ok(Command::PushToTalk),
            "chat" => Ok(Command::Chat),
            "tasks" => Ok(Command::Tasks),
            "task" => {
                let (index, status) = match rest.split_once(char::is_whitespace) {
                    Some((i, s)) => (i, s.trim()),
                    None => return Err("usage: task <number> <status>".to_string()),
                };
                let index: usize = index
                    .parse()
                    .map_err(|_| format!("not a task number: {index}"))?;
                let status = TaskStatus::parse(status)
                    .ok_or_else(|| format!("unknown status: {status}"))?;
                Ok(Command::Task { index, status })
            }
            "status" => Ok(Command::Status),
            "alert" => Ok(Command::Alert),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

pub fn run(state: AppState) {
    let mut mic = SimulatedMic::new();
    let mut speaker = ConsoleSpeaker::new();

    println!("Crewdeck operator console. Type 'help' for commands.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print_prompt(&state);

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "stdin read failed");
                break;
            }
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => execute(&state, cmd, &mut mic, &mut speaker),
            Err(usage) => println!("{usage}"),
        }
    }

    println!("Link closed.");
}

fn print_prompt(state: &AppState) {
    match state.current_identity() {
        Some(id) => print!(
            "{}:{} [{}]> ",
            id.display_name,
            id.department.label(),
            state.selected_channel().label()
        ),
        None => print!("(logged out)> "),
    }
    let _ = io::stdout().flush();
}

fn execute(state: &AppState, cmd: Command, mic: &mut SimulatedMic, speaker: &mut ConsoleSpeaker) {
    match cmd {
        Command::Login {
            department,
            key,
            name,
        } => match state.login(&name, department, &key) {
            Ok(identity) => {
                println!(
                    "Uplink established: {} on {}",
                    identity.display_name,
                    identity.department.label()
                );
                render_chat(state);
            }
            Err(err) => println!("{err}"),
        },
        Command::Logout => {
            state.logout();
            println!("Signed off.");
        }
        Command::Channel(target) => {
            state.set_channel(target);
            render_chat(state);
        }
        Command::Say(content) => send_text(state, state.selected_channel(), &content),
        Command::To { target, content } => send_text(state, target, &content),
        Command::PushToTalk => push_to_talk(state, mic, speaker),
        Command::Chat => render_chat(state),
        Command::Tasks => render_tasks(state),
        Command::Task { index, status } => update_task(state, index, status),
        Command::Status => render_status(state),
        Command::Alert => match state.toggle_alert() {
            Ok(true) => println!("ALERT MODE ENGAGED."),
            Ok(false) => println!("Alert mode cleared."),
            Err(err) => println!("{err}"),
        },
        Command::Dump => match state.snapshot_json() {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(%err, "snapshot failed"),
        },
        Command::Help => print_help(),
        Command::Quit => {}
    }
}

fn send_text(state: &AppState, target: Target, content: &str) {
    match state.send_text(target, content) {
        Ok(_) => render_chat(state),
        Err(err) => println!("{err}"),
    }
}

fn push_to_talk(state: &AppState, mic: &mut SimulatedMic, speaker: &mut ConsoleSpeaker) {
    let handle = match mic.start() {
        Ok(handle) => handle,
        Err(err) => {
            tracing::warn!(%err, "capture failed");
            println!("Capture unavailable: {err}");
            return;
        }
    };
    let payload = match mic.stop(handle) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(%err, "capture failed");
            println!("Capture unavailable: {err}");
            return;
        }
    };

    let target = state.selected_channel();
    match state.send_audio(target, payload) {
        Ok(dispatch) => {
            if dispatch.intercom.is_some() {
                // Broadcast clips auto-play on the common channel; a blocked
                // speaker only costs the sound, never the on-air state.
                if let Some(audio) = &dispatch.message.audio {
                    if let Err(err) = speaker.play(audio) {
                        tracing::warn!(%err, "intercom playback failed");
                    }
                }
                println!("Transmission on air.");
            } else {
                println!("Voice clip sent to {}.", target.label());
            }
            render_chat(state);
        }
        Err(err) => println!("{err}"),
    }
}

fn render_banner(state: &AppState) {
    if state.alert_mode() {
        println!("!!!!!!!!!!!!!!!! RED ALERT !!!!!!!!!!!!!!!!");
    }
    match state.intercom() {
        IntercomState::Active { message, .. } => println!(
            "(*) INTERCOM ACTIVE — {} • {}",
            message.from_dept.label(),
            message.from_name
        ),
        IntercomState::Idle => println!("( ) Common Channel 001 — connected"),
    }
}

fn render_chat(state: &AppState) {
    render_banner(state);

    let channel = state.selected_channel();
    let viewer = state.current_identity();
    let messages = state.visible_messages(channel);
    let rows = viewmodel::chat_rows(&messages, viewer.as_ref());

    if rows.is_empty() {
        println!("-- no traffic on {} --", channel.label());
        return;
    }
    for row in rows {
        match row.kind {
            MessageKind::System => println!("        -- {} --", row.body),
            MessageKind::Alert => println!("{} !! {}: {}", row.time, row.header, row.body),
            _ => {
                let own = if row.is_own { "*" } else { " " };
                println!("{} {}{}: {}", row.time, own, row.header, row.body);
            }
        }
    }
}

fn render_tasks(state: &AppState) {
    if state.current_identity().is_none() {
        println!("Log in to view the board.");
        return;
    }

    let tasks = state.visible_tasks();
    let rows = viewmodel::task_rows(&tasks);
    if rows.is_empty() {
        println!("No active tasks for your department.");
        return;
    }
    for row in rows {
        println!(
            "{}. [{:<11}] {:<12} {} — {} (upd {})",
            row.index, row.status.label(), row.dept, row.title, row.description, row.updated
        );
    }
}

fn update_task(state: &AppState, index: usize, status: TaskStatus) {
    let tasks = state.visible_tasks();
    let task = match index.checked_sub(1).and_then(|i| tasks.get(i)) {
        Some(task) => task,
        None => {
            println!("No task #{index} on your board.");
            return;
        }
    };

    if state.update_task(task.id, status) {
        render_tasks(state);
    } else {
        println!("Task is no longer on the board.");
    }
}

fn render_status(state: &AppState) {
    render_banner(state);
    for line in viewmodel::status_lines(&state.stats()) {
        println!("{line}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  login <dept> <key> <display name>   establish uplink");
    println!("  logout                              sign off");
    println!("  channel <ALL|dept>                  switch channel lens");
    println!("  say <message>                       send text on the current channel");
    println!("  to <dept|ALL> <message>             send text to a specific target");
    println!("  ptt                                 push-to-talk voice clip");
    println!("  chat                                show the current channel");
    println!("  tasks                               show your task board");
    println!("  task <number> <status>              set a task's status");
    println!("  status                              status dashboard");
    println!("  alert                               toggle alert mode (admin)");
    println!("  dump                                JSON state snapshot");
    println!("  quit                                close the console");
}
