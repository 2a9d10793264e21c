use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::path::Path;

impl Repository {
    /// Id of the blob holding the file at `object_path`, stored when `write`
    pub fn hash_object(&self, object_path: &Path, write: bool) -> Result<ObjectId> {
        let data = std::fs::read(object_path).map_err(Error::io(object_path))?;
        let blob = Blob::new(data);

        if !write {
            return Ok(blob.object_id());
        }

        self.database().store(&blob)
    }
}
