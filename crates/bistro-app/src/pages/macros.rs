/// Fills in the parts of [`crate::DisplayablePage`] that only name the page
#[macro_export]
macro_rules! displayable_page_common {
    ($page_title: expr, $route: expr) => {
        fn title() -> &'static str {
            $page_title
        }

        fn route() -> &'static str {
            $route
        }
    };
    ($page_title: expr, $route: expr, $role: expr) => {
        $crate::displayable_page_common!($page_title, $route);

        fn required_role() -> Option<bistro_shared::uac::Role> {
            Some($role)
        }
    };
}
