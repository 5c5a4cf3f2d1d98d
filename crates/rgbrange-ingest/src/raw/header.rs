//! Header row inspection.

use rgbrange_model::Channel;

fn position_of(header: &[String], channel: Channel) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell == channel.name())
}

/// Column positions of `R`, `G`, `B` when the header names all three.
///
/// Matching is exact and case-sensitive; padded names such as `" G"` do not
/// match. When a name repeats, the first occurrence wins.
pub fn find_channel_columns(header: &[String]) -> Option<[usize; 3]> {
    Some([
        position_of(header, Channel::R)?,
        position_of(header, Channel::G)?,
        position_of(header, Channel::B)?,
    ])
}

/// Channels the header does not name.
pub fn missing_channels(header: &[String]) -> Vec<Channel> {
    Channel::ALL
        .into_iter()
        .filter(|channel| position_of(header, *channel).is_none())
        .collect()
}
