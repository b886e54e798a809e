//! GPX decoding into nested point lists (tracks → segments → points).

use super::RenderError;
use crate::geo::GeoPoint;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decoded GPX tracks, recording order preserved at every level.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackFile {
    pub tracks: Vec<Vec<Vec<GeoPoint>>>,
}

impl TrackFile {
    pub fn segment_count(&self) -> usize {
        self.tracks.iter().map(Vec::len).sum()
    }

    pub fn point_count(&self) -> usize {
        self.tracks.iter().flatten().map(Vec::len).sum()
    }

    /// All segments of all tracks, in file order.
    pub fn segments(&self) -> impl Iterator<Item = &[GeoPoint]> {
        self.tracks.iter().flatten().map(Vec::as_slice)
    }
}

/// Decode a GPX document. Routes and standalone waypoints are ignored.
pub fn parse_track<R: Read>(reader: R) -> Result<TrackFile, RenderError> {
    let doc = gpx::read(reader).map_err(|e| RenderError::Track(e.to_string()))?;
    let tracks = doc
        .tracks
        .iter()
        .map(|track| {
            track
                .segments
                .iter()
                .map(|seg| {
                    seg.points
                        .iter()
                        .map(|wpt| {
                            let p = wpt.point();
                            GeoPoint::new(p.y(), p.x())
                        })
                        .collect()
                })
                .collect()
        })
        .collect();
    Ok(TrackFile { tracks })
}

pub fn read_track_file(path: &Path) -> Result<TrackFile, RenderError> {
    let file = File::open(path)?;
    parse_track(BufReader::new(file))
}
