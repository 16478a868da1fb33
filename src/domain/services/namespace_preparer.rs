use crate::domain::{ContentCount, ContentType, Namespace, PageHeader, DEFAULT_AVATAR_URL};

/// Fills in the namespace's derived display fields: per-type content counts
/// and the default avatar.
pub fn prepare_namespace(mut namespace: Namespace) -> Namespace {
    namespace.content_counts = content_counts(&namespace);

    if namespace.avatar_url.as_deref().map_or(true, str::is_empty) {
        namespace.avatar_url = Some(DEFAULT_AVATAR_URL.to_string());
    }

    namespace
}

/// Non-zero counts per content type. Every raw key mentioning "plugin"
/// (lookup_plugin, filter_plugin, ...) is folded into a single Plugins entry.
pub fn content_counts(namespace: &Namespace) -> Vec<ContentCount> {
    let raw = &namespace.summary_fields.content_counts;

    ContentType::ALL
        .iter()
        .filter_map(|content_type| {
            let count = match content_type {
                ContentType::Plugin => raw
                    .iter()
                    .filter(|(key, _)| key.contains("plugin"))
                    .map(|(_, count)| *count)
                    .sum::<u64>(),
                other => raw.get(other.as_str()).copied().unwrap_or(0),
            };
            (count > 0).then(|| ContentCount {
                title: content_type.plural().to_string(),
                count,
                icon_class: content_type.icon_class().to_string(),
            })
        })
        .collect()
}

pub fn page_header(namespace: &Namespace) -> PageHeader {
    let (section, section_path, icon_class) = if namespace.is_vendor {
        ("Partners", "/partners", "fa fa-star")
    } else {
        ("Community Authors", "/community", "fa fa-users")
    };

    PageHeader {
        section: section.to_string(),
        section_path: section_path.to_string(),
        title: namespace.name.clone(),
        icon_class: icon_class.to_string(),
    }
}
