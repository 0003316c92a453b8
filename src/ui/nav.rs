use super::{bold, paint, palette};
use crate::location::Location;

pub const DASHBOARD: &str = "/";
pub const ORDERS: &str = "/orders";
pub const SIGN_IN: &str = "/sign-in";
pub const SIGN_UP: &str = "/sign-up";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { to: DASHBOARD, label: "Início" },
    NavLink { to: ORDERS, label: "Pedidos" },
];

impl NavLink {
    /// Exact path match; `/orders` is not current on `/orders/abc`.
    pub fn is_current(&self, location: &Location) -> bool {
        self.to == location.path()
    }

    pub fn render(&self, location: &Location) -> String {
        if self.is_current(location) {
            format!("[{}]", bold(self.label))
        } else {
            format!(" {} ", self.label)
        }
    }
}

/// Top bar with the app name, navigation links and the managed restaurant.
pub fn render_header(location: &Location, restaurant: Option<&str>) -> String {
    let links: Vec<String> = NAV_LINKS.iter().map(|l| l.render(location)).collect();
    let mut header = format!("{} | {}", paint("pizza.shop", palette::ROSE), links.join(" "));
    if let Some(name) = restaurant {
        header.push_str(" | ");
        header.push_str(name);
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_only_on_exact_path() {
        let orders = NAV_LINKS[1];
        assert!(orders.is_current(&Location::parse("/orders?page=2").unwrap()));
        assert!(!orders.is_current(&Location::parse("/orders/abc").unwrap()));
        assert!(!NAV_LINKS[0].is_current(&Location::parse("/orders").unwrap()));
    }

    #[test]
    fn test_header_highlights_current_link() {
        let header = render_header(&Location::parse("/").unwrap(), Some("Pizza Shop"));
        assert_eq!(header, "pizza.shop | [Início]  Pedidos  | Pizza Shop");
    }
}
