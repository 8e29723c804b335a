mod theme_menu;

pub use theme_menu::ThemeMenu;
