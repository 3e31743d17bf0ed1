//! Character Exporter - writes a player's humanoid profiles to YAML files
//!
//! Layout under the user-data root:
//!
//! ```text
//! ExportedCharacters/<operator argument>/<slot>_<character name>.yml
//! ```
//!
//! The directory is named after the raw argument the operator typed, not the
//! resolved player id. Character names are used verbatim; a name that does not
//! form a valid path fails the export instead of being rewritten.

use std::io::{BufWriter, Write};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::inbound::{ExportError, ExportFailureCause, ExportSummary};
use crate::application::ports::outbound::{ProfileSerializerPort, UserDataPort};
use crate::domain::entities::{CharacterProfile, HumanoidCharacterProfile, PlayerPreferences};
use crate::domain::value_objects::{ResPath, ResPathError};

pub const EXPORT_ROOT: &str = "ExportedCharacters";
pub const FILE_SUFFIX: &str = ".yml";

pub struct CharacterExporter {
    user_data: Arc<dyn UserDataPort>,
    serializer: Arc<dyn ProfileSerializerPort>,
}

impl CharacterExporter {
    pub fn new(user_data: Arc<dyn UserDataPort>, serializer: Arc<dyn ProfileSerializerPort>) -> Self {
        Self {
            user_data,
            serializer,
        }
    }

    /// `ExportedCharacters/<player_directory>`
    pub fn export_directory(player_directory: &str) -> Result<ResPath, ResPathError> {
        ResPath::new(EXPORT_ROOT)?.join(player_directory)
    }

    /// Export every humanoid profile in `prefs`, one file per slot
    ///
    /// Stops at the first failure. Files written before it are left in place.
    #[instrument(skip(self, prefs))]
    pub fn export(
        &self,
        player_directory: &str,
        prefs: &PlayerPreferences,
    ) -> Result<ExportSummary, ExportError> {
        let failure = |cause: ExportFailureCause| ExportError::ExportFailure {
            player_directory: player_directory.to_string(),
            cause,
        };

        let directory = Self::export_directory(player_directory).map_err(|e| failure(e.into()))?;
        self.user_data
            .create_dir(&directory)
            .map_err(|source| {
                failure(ExportFailureCause::Io {
                    path: directory.to_string(),
                    source,
                })
            })?;

        let mut summary = ExportSummary {
            directory,
            exported: 0,
            skipped: 0,
        };

        for (&slot, profile) in &prefs.characters {
            match profile {
                CharacterProfile::Humanoid(profile) => {
                    let path = self
                        .export_character(&summary.directory, slot, profile)
                        .map_err(failure)?;
                    debug!(slot, %path, "Exported character");
                    summary.exported += 1;
                }
                CharacterProfile::Other { kind } => {
                    debug!(slot, kind = %kind, "Skipping unsupported profile kind");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            directory = %summary.directory,
            exported = summary.exported,
            skipped = summary.skipped,
            "Character export complete"
        );
        Ok(summary)
    }

    fn export_character(
        &self,
        directory: &ResPath,
        slot: i32,
        profile: &HumanoidCharacterProfile,
    ) -> Result<ResPath, ExportFailureCause> {
        let document = self.serializer.to_document(profile)?;
        let path = directory.join(&format!("{slot}_{}{FILE_SUFFIX}", profile.name))?;
        let io_error = |source: std::io::Error| ExportFailureCause::Io {
            path: path.to_string(),
            source,
        };

        // The handle is closed when `writer` drops, on success or error
        let mut writer = BufWriter::new(self.user_data.open_write_text(&path).map_err(io_error)?);
        document.write(&mut writer)?;
        writer.flush().map_err(io_error)?;
        drop(writer);

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::JobPriority;
    use crate::infrastructure::export::YamlProfileSerializer;
    use crate::infrastructure::user_data::DiskUserData;
    use std::collections::BTreeMap;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    fn exporter(root: &Path) -> CharacterExporter {
        CharacterExporter::new(
            Arc::new(DiskUserData::new(root)),
            Arc::new(YamlProfileSerializer::new("test-fork")),
        )
    }

    fn humanoid(name: &str) -> CharacterProfile {
        CharacterProfile::Humanoid(
            HumanoidCharacterProfile::new(name, "Human")
                .with_job_priority("Botanist", JobPriority::High),
        )
    }

    fn prefs(characters: Vec<(i32, CharacterProfile)>) -> PlayerPreferences {
        PlayerPreferences::new(characters.into_iter().collect::<BTreeMap<_, _>>())
    }

    fn list_files(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_one_file_per_humanoid_slot() {
        let root = TempDir::new().unwrap();
        let prefs = prefs(vec![
            (0, humanoid("Urist McHands")),
            (2, humanoid("Jane Doe")),
            (5, humanoid("Boris")),
        ]);

        let summary = exporter(root.path()).export("Urist", &prefs).unwrap();

        assert_eq!(summary.exported, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(
            list_files(&root.path().join("ExportedCharacters/Urist")),
            vec!["0_Urist McHands.yml", "2_Jane Doe.yml", "5_Boris.yml"]
        );
    }

    #[test]
    fn written_file_decodes_to_the_original_profile() {
        let root = TempDir::new().unwrap();
        let profile = HumanoidCharacterProfile::new("Urist McHands", "Dwarf");
        let prefs = prefs(vec![(1, CharacterProfile::Humanoid(profile.clone()))]);

        exporter(root.path()).export("Urist", &prefs).unwrap();

        let text = std::fs::read_to_string(
            root.path().join("ExportedCharacters/Urist/1_Urist McHands.yml"),
        )
        .unwrap();
        let document = crate::application::ports::outbound::ProfileDocument::parse(&text).unwrap();
        let decoded = YamlProfileSerializer::new("test-fork")
            .from_document(&document)
            .unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn other_profile_kinds_are_skipped() {
        let root = TempDir::new().unwrap();
        let prefs = prefs(vec![
            (0, humanoid("Urist")),
            (1, CharacterProfile::Other { kind: "borg".to_string() }),
        ]);

        let summary = exporter(root.path()).export("Urist", &prefs).unwrap();

        assert_eq!((summary.exported, summary.skipped), (1, 1));
        assert_eq!(
            list_files(&root.path().join("ExportedCharacters/Urist")),
            vec!["0_Urist.yml"]
        );
    }

    #[test]
    fn empty_preferences_create_an_empty_directory() {
        let root = TempDir::new().unwrap();

        let summary = exporter(root.path()).export("Nobody", &prefs(vec![])).unwrap();

        assert_eq!(summary.exported, 0);
        let dir = root.path().join("ExportedCharacters/Nobody");
        assert!(dir.is_dir());
        assert!(list_files(&dir).is_empty());
    }

    #[test]
    fn rerunning_overwrites_previous_files() {
        let root = TempDir::new().unwrap();
        let exporter = exporter(root.path());
        let file = root.path().join("ExportedCharacters/Urist/0_Urist.yml");

        exporter.export("Urist", &prefs(vec![(0, humanoid("Urist"))])).unwrap();
        std::fs::write(&file, "stale content that is much longer than any yaml export would be\n".repeat(100)).unwrap();

        exporter.export("Urist", &prefs(vec![(0, humanoid("Urist"))])).unwrap();

        let text = std::fs::read_to_string(&file).unwrap();
        assert!(!text.contains("stale content"));
        assert!(text.contains("Urist"));
    }

    #[test]
    fn character_name_escaping_the_directory_fails_the_export() {
        let root = TempDir::new().unwrap();
        let prefs = prefs(vec![(0, humanoid("../../evil"))]);

        let err = exporter(root.path()).export("Urist", &prefs).unwrap_err();

        assert!(matches!(
            err,
            ExportError::ExportFailure { cause: ExportFailureCause::Path(_), .. }
        ));
        assert!(!root.path().join("evil.yml").exists());
    }

    /// Disk storage that refuses to open one particular file
    struct FailingOn {
        inner: DiskUserData,
        filename: &'static str,
    }

    impl UserDataPort for FailingOn {
        fn create_dir(&self, path: &ResPath) -> io::Result<()> {
            self.inner.create_dir(path)
        }

        fn open_write_text(&self, path: &ResPath) -> io::Result<Box<dyn Write + Send>> {
            if path.filename() == self.filename {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
            }
            self.inner.open_write_text(path)
        }
    }

    #[test]
    fn write_failure_aborts_without_rolling_back() {
        let root = TempDir::new().unwrap();
        let exporter = CharacterExporter::new(
            Arc::new(FailingOn {
                inner: DiskUserData::new(root.path()),
                filename: "1_Second.yml",
            }),
            Arc::new(YamlProfileSerializer::new("test-fork")),
        );
        let prefs = prefs(vec![
            (0, humanoid("First")),
            (1, humanoid("Second")),
            (2, humanoid("Third")),
        ]);

        let err = exporter.export("Urist", &prefs).unwrap_err();

        assert!(matches!(
            err,
            ExportError::ExportFailure { ref player_directory, cause: ExportFailureCause::Io { .. } }
                if player_directory == "Urist"
        ));
        assert_eq!(
            list_files(&root.path().join("ExportedCharacters/Urist")),
            vec!["0_First.yml"]
        );
    }
}
