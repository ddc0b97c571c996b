use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

const STORAGE_PREFIX: &str = "folio";

fn storage_key(key: &str) -> String {
    format!("{STORAGE_PREFIX}_{key}")
}

// storage being unavailable (private browsing, quota, disabled) is not an
// error the user can do anything about, so failures only go to the console
pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case and is not logged
pub fn get_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_prefixed() {
        assert_eq!(storage_key("theme"), "folio_theme");
    }
}
