use crate::commands::Command;
use quarkstrom::winit::event::VirtualKeyCode;
use quarkstrom::winit_input_helper::WinitInputHelper;
use ultraviolet::Vec2;

const BOUND_KEYS: [VirtualKeyCode; 8] = [
    VirtualKeyCode::Escape,
    VirtualKeyCode::Equals,
    VirtualKeyCode::Minus,
    VirtualKeyCode::Key0,
    VirtualKeyCode::LBracket,
    VirtualKeyCode::RBracket,
    VirtualKeyCode::Backslash,
    VirtualKeyCode::Space,
];

pub fn command_for_key(key: VirtualKeyCode) -> Option<Command> {
    let cmd = match key {
        VirtualKeyCode::Escape => Command::Quit,
        VirtualKeyCode::Equals => Command::AddParticle,
        VirtualKeyCode::Minus => Command::RemoveOldest,
        VirtualKeyCode::Key0 => Command::ResetFrameRate,
        VirtualKeyCode::LBracket => Command::DecreaseFrameRate,
        VirtualKeyCode::RBracket => Command::IncreaseFrameRate,
        VirtualKeyCode::Backslash => Command::ToggleFrameCap,
        VirtualKeyCode::Space => Command::ToggleTrails,
        _ => return None,
    };
    Some(cmd)
}

impl super::Renderer {
    /// Queue commands for the next frame.
    pub fn handle_input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
        for key in BOUND_KEYS {
            if input.key_pressed(key) {
                if let Some(cmd) = command_for_key(key) {
                    self.pending.push(cmd);
                }
            }
        }

        // Any button
        if (0..3).any(|button| input.mouse_pressed(button)) {
            if let Some((mx, my)) = input.mouse() {
                let point = super::screen_to_world(
                    Vec2::new(mx, my),
                    width,
                    height,
                    self.pos,
                    self.scale,
                    self.world_height(),
                );
                self.pending.push(Command::SpawnAt(point));
            }
        }
    }
}
