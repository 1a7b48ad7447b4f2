//! Fixtures shared by the unit tests: model builders and a seeded in-memory store.

use heapless::String as HeaplessString;
use uuid::Uuid;

use crate::gateway::InMemoryStore;
use crate::models::language::LanguageModel;
use crate::models::user::UserModel;

pub fn language(lang: &str, region: Option<&str>, variant: Option<&str>, is_default: bool) -> LanguageModel {
    LanguageModel {
        id: Uuid::new_v4(),
        lang_code: HeaplessString::try_from(lang).unwrap(),
        region_code: region.map(|r| HeaplessString::try_from(r).unwrap()),
        variant_code: variant.map(|v| HeaplessString::try_from(v).unwrap()),
        is_default,
    }
}

pub fn user(username: &str, locale: Option<&str>) -> UserModel {
    UserModel {
        id: Uuid::new_v4(),
        username: HeaplessString::try_from(username).unwrap(),
        locale: locale.map(|l| HeaplessString::try_from(l).unwrap()),
    }
}

/// Catalog: en-US (default), en-GB, es, es-ES, fr, ca-ES-valencia.
///
/// Users: `test` without a preference, `maria` preferring es-ES, `stale` preferring an
/// unsupported locale and `garbage` whose stored value is not a locale at all.
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    for lang in [
        language("en", Some("US"), None, true),
        language("en", Some("GB"), None, false),
        language("es", None, None, false),
        language("es", Some("ES"), None, false),
        language("fr", None, None, false),
        language("ca", Some("ES"), Some("valencia"), false),
    ] {
        store.insert(&lang);
    }
    for u in [
        user("test", None),
        user("maria", Some("es-ES")),
        user("stale", Some("xx-YY")),
        user("garbage", Some("not a locale")),
    ] {
        store.insert(&u);
    }
    store
}
