//! Lokale Session-Persistenz (Projekt + Zwischenablage) mit Instanz-Lock.
//!
//! Pro Session liegen zwei Dateien im Session-Verzeichnis:
//! `<name>.json` mit den Daten und `<name>.lock`. Auf der Lock-Datei hält
//! die besitzende Instanz einen exklusiven Betriebssystem-Lock und trägt ihre
//! PID ein; beim geordneten Freigeben wird die Datei geleert.
//!
//! - Lock frei, Datei leer: Session wird übernommen.
//! - Lock frei, Datei mit PID: Vorgänger ist abgestürzt, Daten werden verworfen.
//! - Lock gehalten: eine laufende Instanz nutzt die Session, es wird auf eine
//!   neu erzeugte Session ausgewichen.
//!
//! Erzeugte Sessions (Präfix [`GENERATED_PREFIX`]) leben nur so lange wie
//! ihre Instanz und werden beim Freigeben samt Daten gelöscht.

use crate::core::{ClipboardItem, Project};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions, TryLockError};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Format-Version der Session-Datei.
pub const SESSION_VERSION: u32 = 1;

/// Name der Standard-Session.
pub const DEFAULT_SESSION: &str = "default";

/// Präfix erzeugter Session-Namen.
pub const GENERATED_PREFIX: &str = "session-";

/// Persistierter Session-Inhalt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub version: u32,
    pub project: Project,
    #[serde(default)]
    pub clipboard: Option<ClipboardItem>,
}

#[derive(Serialize)]
struct PersistedSessionRef<'a> {
    version: u32,
    project: &'a Project,
    clipboard: Option<&'a ClipboardItem>,
}

/// Ergebnis von [`SessionStore::acquire`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// Lock übernommen, gespeicherte Daten sind gültig
    Acquired,
    /// Verwaister Lock vorgefunden, Session-Daten wurden verworfen
    StaleCleared,
    /// Session `from` ist von einer laufenden Instanz belegt;
    /// der Speicher arbeitet nun auf einer neu erzeugten Session
    Redirected { from: String },
}

/// Dateibasierter Session-Speicher
#[derive(Debug)]
pub struct SessionStore {
    dir: PathBuf,
    name: String,
    lock: Option<File>,
}

impl SessionStore {
    /// Erstellt einen Speicher für Session `name` in `dir` (noch ohne Lock).
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            lock: None,
        }
    }

    /// Name der Session.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pfad der Session-Daten.
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.name))
    }

    /// Pfad der Lock-Datei.
    pub fn lock_path(&self) -> PathBuf {
        self.dir.join(format!("{}.lock", self.name))
    }

    /// Gibt an, ob diese Instanz den Lock hält.
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Session wurde per [`generate_session_name`] erzeugt.
    pub fn is_generated(&self) -> bool {
        self.name.starts_with(GENERATED_PREFIX)
    }

    /// Übernimmt den Lock der Session.
    ///
    /// Ist die Session von einer laufenden Instanz belegt, wechselt der
    /// Speicher auf eine neu erzeugte Session, ohne fremde Daten anzufassen.
    pub fn acquire(&mut self) -> Result<LockOutcome> {
        if self.is_locked() {
            return Ok(LockOutcome::Acquired);
        }
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Session-Verzeichnis nicht anlegbar: {}", self.dir.display())
        })?;

        if let Some(outcome) = self.try_lock()? {
            return Ok(outcome);
        }

        let from = std::mem::replace(&mut self.name, generate_session_name());
        log::warn!(
            "Session '{}' wird von einer anderen Instanz verwendet, weiter mit '{}'",
            from,
            self.name
        );
        match self.try_lock()? {
            Some(_) => Ok(LockOutcome::Redirected { from }),
            None => bail!("Session '{}' ist ebenfalls gesperrt", self.name),
        }
    }

    /// Versucht den exklusiven Lock; `None` wenn eine andere Instanz ihn hält.
    fn try_lock(&mut self) -> Result<Option<LockOutcome>> {
        let lock_path = self.lock_path();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Lock nicht öffenbar: {}", lock_path.display()))?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => return Ok(None),
            Err(TryLockError::Error(e)) => {
                return Err(e)
                    .with_context(|| format!("Lock fehlgeschlagen: {}", lock_path.display()))
            }
        }

        let mut previous_owner = String::new();
        file.read_to_string(&mut previous_owner)
            .with_context(|| format!("Lock nicht lesbar: {}", lock_path.display()))?;

        let outcome = if previous_owner.trim().is_empty() {
            LockOutcome::Acquired
        } else {
            log::warn!(
                "Session '{}' wurde von Prozess {} nicht freigegeben, gespeicherte Daten werden verworfen",
                self.name,
                previous_owner.trim()
            );
            self.clear()?;
            LockOutcome::StaleCleared
        };

        write_owner(&mut file)
            .with_context(|| format!("Lock nicht schreibbar: {}", lock_path.display()))?;

        self.lock = Some(file);
        log::info!("Session '{}' gesperrt", self.name);
        Ok(Some(outcome))
    }

    /// Gibt den Lock frei.
    ///
    /// Erzeugte Sessions werden dabei samt Daten entfernt.
    pub fn release(&mut self) -> Result<()> {
        let Some(file) = self.lock.take() else {
            return Ok(());
        };

        if self.is_generated() {
            self.clear()?;
            drop(file);
            remove_if_exists(&self.lock_path())?;
        } else {
            // Leere Lock-Datei markiert geordnetes Beenden
            file.set_len(0).with_context(|| {
                format!("Lock nicht zurücksetzbar: {}", self.lock_path().display())
            })?;
        }
        log::info!("Session '{}' freigegeben", self.name);
        Ok(())
    }

    /// Lädt die gespeicherte Session.
    ///
    /// `None`, wenn keine Daten existieren oder die Version nicht passt.
    pub fn load(&self) -> Result<Option<PersistedSession>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Session nicht lesbar: {}", path.display()))?;
        let session: PersistedSession = serde_json::from_str(&content)
            .with_context(|| format!("Session fehlerhaft: {}", path.display()))?;

        if session.version != SESSION_VERSION {
            log::warn!(
                "Session-Version {} wird ignoriert (erwartet {})",
                session.version,
                SESSION_VERSION
            );
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Schreibt Projekt und Zwischenablage.
    pub fn store(&self, project: &Project, clipboard: Option<&ClipboardItem>) -> Result<()> {
        let payload = PersistedSessionRef {
            version: SESSION_VERSION,
            project,
            clipboard,
        };
        let content = serde_json::to_string(&payload)?;
        let path = self.data_path();
        std::fs::write(&path, content)
            .with_context(|| format!("Session nicht schreibbar: {}", path.display()))?;
        log::debug!("Session '{}' gespeichert", self.name);
        Ok(())
    }

    /// Löscht die gespeicherten Daten (Lock bleibt bestehen).
    pub fn clear(&self) -> Result<()> {
        remove_if_exists(&self.data_path())
    }
}

fn write_owner(file: &mut File) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    write!(file, "{}", std::process::id())?;
    file.flush()
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Datei nicht löschbar: {}", path.display())),
    }
}

/// Erzeugt einen neuen, eindeutigen Session-Namen.
pub fn generate_session_name() -> String {
    use rand::Rng;
    let suffix: u32 = rand::thread_rng().gen_range(0..0x00ff_ffff);
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{GENERATED_PREFIX}{millis}-{suffix:06x}")
}
