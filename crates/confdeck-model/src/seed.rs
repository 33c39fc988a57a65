//! Built-in configuration collection used when no backend or seed file is supplied.

use crate::model::{Configuration, Property, PropertyList};

/// Declared type recorded for every seeded property.
pub const STRING_TYPE: &str = "java.lang.String";
/// Description placeholder recorded for seeded properties.
pub const NO_DESCRIPTION: &str = "<no persistent property description>";

fn property(name: &str, value: &str) -> Property {
    Property {
        name: name.to_string(),
        value: value.to_string(),
        kind: STRING_TYPE.to_string(),
        description: NO_DESCRIPTION.to_string(),
    }
}

fn configuration(uri: &str, name: &str, properties: Vec<Property>) -> Configuration {
    Configuration {
        uri: uri.to_string(),
        name: name.to_string(),
        properties: PropertyList::from(properties),
        loaded: true,
        storable: true,
        updateable: true,
    }
}

/// The four seeded configurations, in display order.
#[must_use]
pub fn configurations() -> Vec<Configuration> {
    vec![
        configuration(
            "classpath:/config/myConfig.properties",
            "myConfig",
            vec![
                property("//myapp/admin/email", "myadmin@mysociete.com"),
                property("//myapp/sample/boolean", "false"),
                property("//myapp/sample/float", "123.45"),
                property("//myapp/name", "my new application"),
                property("//myapp/sample/date", "2010-12-01T02:45:30"),
            ],
        ),
        configuration(
            "classpath:/cache/myContext.properties",
            "myCacheConfig",
            vec![
                property(
                    "//cacheManagers/myCacheManager/fileStoreUri",
                    "classpath:/cache/ehcache.xml",
                ),
                property("//cacheManagers/myCacheManager/providerCode", "ehCache"),
                property("//caches/myCache/cacheName", "CacheSample01"),
                property("//caches/myCache/cacheManagerRef", "myCacheManager"),
            ],
        ),
        configuration(
            "classpath:/store/myContext.properties",
            "myStore",
            vec![
                property("//fileStores/myStore/connectTimeout", "1500"),
                property("//fileStores/myStore/readTimeout", "10000"),
                property("//fileStores/myStore/readonly", "false"),
                property(
                    "//fileStores/myStore/baseUri",
                    "http://localhost:8380/kaleido-it/",
                ),
            ],
        ),
        configuration(
            "classpath:/i18n/myContext.properties",
            "myI18nConfig",
            vec![
                property("//i18ns/myBundle/locale/lang", "en"),
                property("//i18ns/myBundle/locale/country", "GB"),
                property("//i18ns/myBundle/baseName", "i18n/messages"),
                property("//cacheManagers/myCacheManager/providerCode", "ehCache"),
                property(
                    "//cacheManagers/myCacheManager/fileStoreUri",
                    "classpath:/i18n/ehcache.xml",
                ),
            ],
        ),
    ]
}
