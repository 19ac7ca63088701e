use tr_web::app_root::app_root;

fn main() {
    tr_web::app::logging::init();
    dioxus::launch(app_root);
}
