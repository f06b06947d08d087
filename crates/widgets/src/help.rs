/// Footer line listing the key bindings.
#[derive(Debug, Default)]
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    /// Tab hints are only shown when there is more than one battery.
    pub fn view(&self, battery_count: usize) -> String {
        let quit = "[gray]Press [yellow]q[gray]/[yellow]ESC[gray] to quit";
        if battery_count > 1 {
            format!("{quit}, [yellow]Tab[gray]/[yellow]h[gray]/[yellow]l[gray] to switch battery[-]")
        } else {
            format!("{quit}[-]")
        }
    }
}
