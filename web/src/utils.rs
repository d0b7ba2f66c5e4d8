use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Types that persist under a fixed local-storage key.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalPersist: Sized {
    fn local_load() -> Option<Self>;
    fn local_save(&self);
}

impl<T> LocalPersist for T
where
    T: StorageKey + Serialize + DeserializeOwned,
{
    fn local_load() -> Option<Self> {
        LocalStorage::get(Self::KEY).ok()
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("failed to save {}: {:?}", Self::KEY, err);
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
