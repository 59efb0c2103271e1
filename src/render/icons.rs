// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_RESET: &str = "\u{21BB}";
pub(crate) const ICON_SKIP: &str = "\u{23ED}";

pub(crate) const ICON_FOCUS: &str = "\u{1F345}";
pub(crate) const ICON_BREAK: &str = "\u{2615}";
pub(crate) const ICON_LONG_BREAK: &str = "\u{1F334}";
