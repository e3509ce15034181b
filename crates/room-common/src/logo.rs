//! Startup banner.

use crate::colorize::colorize;

/// Banner shape: `*` cells are drawn as bright blue `#`, `#` cells as blue
/// `*`, everything else is reset.
pub const LOGO_SHAPE: &str = "\
************#  ********************#  *******#            *******#       **********#
************#  ********************#  ********#          ********#    ****************#
####****#####          ****#########  *********#        *********#   *****########*****#
    ****#              ****#          ****#*****#      *****#****#  *****#         *****#
    ****#              ****#          ****# *****#    *****# ****#  ****#           ****#
    ****#              ****#          ****#  *****#  *****#  ****#  ****#           ****#
    ****#              ****#          ****#   ***********#   ****#  ****#           ****#
    ****#              ****#          ****#    *********#    ****#  ****#           ****#
    ****#              ****#          ****#     ########     ****#  *****#         *****#
    ****#              ****#          ****#                  ****#   *****#       *****#
************#          ****#          ****#                  ****#    ****************#
************#          ****#          ****#                  ****#       **********###
#############          #####          #####                  #####       ###########";

/// Marker source for the banner, one marker per cell.
pub fn logo_markup() -> String {
    let mut markup = String::with_capacity(LOGO_SHAPE.len() * 12);
    for c in LOGO_SHAPE.chars() {
        match c {
            '*' => markup.push_str("[[BRIGHT_BLUE]]#"),
            '#' => markup.push_str("[[BLUE]]*"),
            other => {
                markup.push_str("[[RESET]]");
                markup.push(other);
            }
        }
    }
    markup
}

/// The colored banner, ending in a reset code.
pub fn logo() -> String {
    colorize(&logo_markup())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::codes;
    use crate::string_utils::strip_ansi_codes;

    fn expected_logo() -> String {
        let mut out = String::new();
        for c in LOGO_SHAPE.chars() {
            match c {
                '*' => {
                    out.push_str(codes::BRIGHT_BLUE);
                    out.push('#');
                }
                '#' => {
                    out.push_str(codes::BLUE);
                    out.push('*');
                }
                other => {
                    out.push_str(codes::RESET);
                    out.push(other);
                }
            }
        }
        out.push_str(codes::RESET);
        out
    }

    #[test]
    fn test_logo_matches_cell_by_cell_rendering() {
        assert_eq!(logo(), expected_logo());
    }

    #[test]
    fn test_logo_swaps_glyphs() {
        let plain = strip_ansi_codes(&logo());
        let swapped: String = LOGO_SHAPE
            .chars()
            .map(|c| match c {
                '*' => '#',
                '#' => '*',
                other => other,
            })
            .collect();
        assert_eq!(plain, swapped);
    }

    #[test]
    fn test_logo_has_thirteen_rows() {
        assert_eq!(LOGO_SHAPE.lines().count(), 13);
        assert!(logo().ends_with(codes::RESET));
    }
}
