use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::errors::Result;

impl Repository {
    /// Decode the object named by a full or abbreviated id
    pub fn cat_file(&self, object_id: &str) -> Result<ObjectBox> {
        let oid = self.database().resolve(object_id)?;
        self.database().parse_object(&oid)
    }
}
