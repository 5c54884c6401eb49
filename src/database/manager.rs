use crate::database::connection::Database;
use crate::database::models::LeaderboardEntry;
use crate::models::leaderboard::LEADERBOARD_SIZE;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, SendError, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DbStatus {
    Idle,
    Initializing,
    Loading,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct DbState {
    pub status: DbStatus,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Bumped each time `leaderboard` is replaced.
    pub leaderboard_version: u64,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            status: DbStatus::Idle,
            leaderboard: Vec::new(),
            leaderboard_version: 0,
        }
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum DbCommand {
    Init,
    FetchLeaderboard,
    Shutdown,
}

/// Owns the database thread and its shared state.
pub struct DbManager {
    state: Arc<Mutex<DbState>>,
    command_sender: Sender<DbCommand>,
}

impl DbManager {
    pub fn new(db_path: PathBuf) -> Self {
        let state = Arc::new(Mutex::new(DbState::new()));
        let (tx, rx) = std::sync::mpsc::channel();

        let state_clone = Arc::clone(&state);
        let spawned = thread::Builder::new()
            .name("DB Thread".to_string())
            .spawn(move || match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(Self::db_thread(state_clone, rx, db_path)),
                Err(e) => {
                    log::error!("DB: Failed to start runtime: {}", e);
                    set_status(&state_clone, DbStatus::Error(e.to_string()));
                }
            });

        if let Err(e) = spawned {
            log::error!("DB: Failed to spawn thread: {}", e);
            set_status(&state, DbStatus::Error(e.to_string()));
        }

        Self {
            state,
            command_sender: tx,
        }
    }

    async fn db_thread(state: Arc<Mutex<DbState>>, rx: Receiver<DbCommand>, db_path: PathBuf) {
        log::info!("DB: Thread started");
        let mut db: Option<Database> = None;

        loop {
            match rx.try_recv() {
                Ok(DbCommand::Init) => {
                    set_status(&state, DbStatus::Initializing);
                    match Database::new(&db_path).await {
                        Ok(d) => {
                            db = Some(d);
                            set_status(&state, DbStatus::Idle);
                        }
                        Err(e) => {
                            log::warn!("DB: Initialization error: {}", e);
                            let status = DbStatus::Error(format!("Initialization error: {}", e));
                            set_status(&state, status);
                        }
                    }
                }
                Ok(DbCommand::FetchLeaderboard) => {
                    if let Some(ref d) = db {
                        Self::load_leaderboard(&state, d).await;
                    }
                }
                Ok(DbCommand::Shutdown) | Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => {}
            }

            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        log::info!("DB: Thread stopped");
    }

    async fn load_leaderboard(state: &Arc<Mutex<DbState>>, db: &Database) {
        set_status(state, DbStatus::Loading);

        match db.get_top_scores(LEADERBOARD_SIZE as i64).await {
            Ok(entries) => {
                if let Ok(mut s) = state.lock() {
                    s.leaderboard = entries;
                    s.leaderboard_version += 1;
                    s.status = DbStatus::Idle;
                }
            }
            Err(e) => {
                log::warn!("DB: Leaderboard loading error: {}", e);
                set_status(state, DbStatus::Error(format!("Loading error: {}", e)));
            }
        }
    }

    pub fn get_state(&self) -> Arc<Mutex<DbState>> {
        Arc::clone(&self.state)
    }

    fn send_command(&self, cmd: DbCommand) -> Result<(), SendError<DbCommand>> {
        self.command_sender.send(cmd)
    }

    pub fn init(&self) {
        let _ = self.send_command(DbCommand::Init);
    }

    pub fn fetch_leaderboard(&self) {
        let _ = self.send_command(DbCommand::FetchLeaderboard);
    }

    pub fn shutdown(&self) {
        let _ = self.send_command(DbCommand::Shutdown);
    }
}

fn set_status(state: &Arc<Mutex<DbState>>, status: DbStatus) {
    if let Ok(mut s) = state.lock() {
        s.status = status;
    }
}
