use git2::{ObjectType, Repository};

use crate::error::Result;
use crate::git::repository::GitRepository;
use crate::models::TrackedFile;

impl GitRepository {
    /// Every blob in the tree of `revision`, with its size.
    pub fn get_tracked_files(&self, revision: &str) -> Result<Vec<TrackedFile>> {
        let oid = self.resolve(revision)?;
        self.with_repo(|repo| {
            let tree = repo.find_commit(oid)?.tree()?;
            let odb = repo.odb()?;

            fn collect(
                repo: &Repository,
                odb: &git2::Odb,
                tree: &git2::Tree,
                base_path: &str,
                files: &mut Vec<TrackedFile>,
            ) -> Result<()> {
                for entry in tree.iter() {
                    let name = String::from_utf8_lossy(entry.name_bytes());
                    let path = if base_path.is_empty() {
                        name.to_string()
                    } else {
                        format!("{}/{}", base_path, name)
                    };

                    match entry.kind() {
                        Some(ObjectType::Blob) => {
                            let (size, _) = odb.read_header(entry.id())?;
                            files.push(TrackedFile::new(path, size as u64));
                        }
                        Some(ObjectType::Tree) => {
                            let subtree = repo.find_tree(entry.id())?;
                            collect(repo, odb, &subtree, &path, files)?;
                        }
                        // Submodules have no blame of their own
                        _ => {}
                    }
                }
                Ok(())
            }

            let mut files = Vec::new();
            collect(repo, &odb, &tree, "", &mut files)?;
            Ok(files)
        })
    }
}
