use dioxus::prelude::*;

use crate::{
    app::{self, components::toast::Toaster, session::SessionProvider}, config::WebConfig
};

/// Root shell: config, toasts and the session provider around the router.
#[component]
pub fn app_root() -> Element {
    use_context_provider(|| Signal::new(WebConfig::from_env()));
    use_context_provider(Toaster::new);

    rsx! {
        document::Title { "ToolRent" }
        document::Stylesheet { href: clean_asset_path(asset!("/assets/tailwind.css", AssetOptions::builder().with_hash_suffix(false)).to_string()) }
        div {
            SessionProvider { app::routes::AppRouter {} }
        }
    }
}

/// `asset!` yields an absolute path under `cargo run`; keep only the `/assets/...` part.
pub fn clean_asset_path(path: String) -> String {
    match path.find("/assets/") {
        Some(idx) => path[idx..].to_string(),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_made_relative() {
        assert_eq!(
            clean_asset_path("/home/dev/toolrent/crates/tr-web/assets/tailwind.css".to_string()),
            "/assets/tailwind.css"
        );
        assert_eq!(clean_asset_path("/tailwind.css".to_string()), "/tailwind.css");
    }
}
