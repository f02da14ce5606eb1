//! S3 implementation of [`ObjectStore`].

use chrono::{DateTime, Utc};
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use ferry_core::{KeyPrefix, ObjectKey, RemoteObject, StoreConfig};

use crate::error::StoreError;
use crate::store::ObjectStore;

/// Blocking S3 client for one bucket.
pub struct S3Store {
    bucket: Bucket,
}

impl S3Store {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let credentials = Credentials::new(
            Some(&config.credentials.access_key_id),
            Some(&config.credentials.secret_access_key),
            None,
            None,
            None,
        )?;

        let region = region_for(&config.region, config.endpoint.as_deref());
        let mut bucket = Bucket::new(&config.bucket, region, credentials)?;
        if config.endpoint.is_some() {
            // S3-compatible stores (MinIO and friends) want path-style URLs.
            bucket = bucket.with_path_style();
        }
        Ok(Self { bucket: *bucket })
    }
}

/// Custom-endpoint stores keep their endpoint; AWS proper derives it from
/// the region name.
fn region_for(region: &str, endpoint: Option<&str>) -> Region {
    match endpoint {
        Some(endpoint) => Region::Custom {
            region: region.to_owned(),
            endpoint: endpoint.to_owned(),
        },
        None => Region::Custom {
            region: region.to_owned(),
            endpoint: format!("https://s3.{region}.amazonaws.com"),
        },
    }
}

impl ObjectStore for S3Store {
    fn list(&self, prefix: Option<&KeyPrefix>) -> Result<Vec<RemoteObject>, StoreError> {
        let filter = prefix.map(KeyPrefix::filter).unwrap_or_default();
        let pages = self.bucket.list(filter, None)?;

        let mut objects = Vec::new();
        for page in pages {
            for object in page.contents {
                let last_modified = parse_object_timestamp(&object.key, &object.last_modified)?;
                objects.push(RemoteObject {
                    key: ObjectKey::from(object.key),
                    last_modified,
                });
            }
        }
        tracing::debug!(count = objects.len(), "listed stored objects");
        Ok(objects)
    }

    fn put(&self, key: &ObjectKey, content: &[u8], content_type: &str) -> Result<(), StoreError> {
        self.bucket
            .put_object_with_content_type(&key.0, content, content_type)?;
        Ok(())
    }

    fn delete(&self, key: &ObjectKey) -> Result<(), StoreError> {
        self.bucket.delete_object(&key.0)?;
        Ok(())
    }
}

fn parse_object_timestamp(key: &str, value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| StoreError::Timestamp {
            key: key.to_owned(),
            value: value.to_owned(),
            source,
        })
}
