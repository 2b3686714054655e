#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use worklog::errors::AppResult;
use worklog::models::{Draft, RawRowError, Record, Row};
use worklog::store::{MemoryTable, Store};
use worklog::ui::Console;

pub const HEADER: &str = "date,task_name,time_spent,note\n";

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn wlog(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worklog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Path of a work log file inside `dir`, written with `content` when given.
pub fn log_file(dir: &Path, content: Option<&str>) -> PathBuf {
    let path = dir.join("work_log.txt");
    if let Some(c) = content {
        fs::write(&path, c).expect("write work log");
    }
    path
}

pub fn rec(date: &str, task: &str, minutes: &str, note: &str) -> Record {
    Record::validate(&Draft {
        date: date.to_string(),
        task_name: task.to_string(),
        duration: minutes.to_string(),
        note: note.to_string(),
    })
    .expect("valid record")
}

pub fn row(date: &str, task: &str, minutes: &str, note: &str) -> Row {
    Row::Valid(rec(date, task, minutes, note))
}

pub fn malformed(line: usize, fields: &[&str]) -> Row {
    Row::Malformed(RawRowError {
        line,
        fields: fields.iter().map(|f| f.to_string()).collect(),
        reason: "test".to_string(),
    })
}

/// Store over an in-memory table holding the header plus `lines`.
pub fn memory_store(lines: &[&str]) -> Store<MemoryTable> {
    let mut content = HEADER.to_string();
    for l in lines {
        content.push_str(l);
        content.push('\n');
    }
    Store::new(MemoryTable::with_content(content))
}

pub fn content(store: &Store<MemoryTable>) -> String {
    store.table().content().unwrap_or_default().to_string()
}

/// Console fed from a fixed list of input lines; records everything shown.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn clear_display(&mut self) {
        self.clears += 1;
    }

    fn show(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        self.output.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted").into())
    }
}
