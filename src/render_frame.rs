//! Fixed-size little-endian record of what the renderer needs to place the ball mesh.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use glam::{Mat3A, Vec3A};
use std::io::{Cursor, Error as IoError, ErrorKind, Result as IoResult, Write};

use crate::sim::{BallState, HoopSide, ShotPhase};

/// tick + pos + rot_mat + spin_axis + spin_speed + phase + target
pub const BALL_FRAME_SIZE: usize = 8 + 12 + 36 + 12 + 4 + 1 + 1;

const NO_TARGET: u8 = u8::MAX;

trait FromCursor {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> IoResult<Self>
    where
        Self: Sized;
}

impl FromCursor for Vec3A {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> IoResult<Self> {
        Ok(Self::new(
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
            bytes.read_f32::<LittleEndian>()?,
        ))
    }
}

impl FromCursor for Mat3A {
    fn from_cursor(bytes: &mut Cursor<&[u8]>) -> IoResult<Self> {
        Ok(Self::from_cols(
            Vec3A::from_cursor(bytes)?,
            Vec3A::from_cursor(bytes)?,
            Vec3A::from_cursor(bytes)?,
        ))
    }
}

fn write_vec3a<W: Write>(out: &mut W, v: Vec3A) -> IoResult<()> {
    for c in v.to_array() {
        out.write_f32::<LittleEndian>(c)?;
    }

    Ok(())
}

fn invalid_data(msg: String) -> IoError {
    IoError::new(ErrorKind::InvalidData, msg)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallFrame {
    pub tick: u64,
    pub pos: Vec3A,
    pub rot_mat: Mat3A,
    pub spin_axis: Vec3A,
    pub spin_speed: f32,
    pub phase: ShotPhase,
    pub target: Option<HoopSide>,
}

impl BallFrame {
    #[must_use]
    pub fn from_ball(tick: u64, ball: &BallState) -> Self {
        Self {
            tick,
            pos: ball.pos,
            rot_mat: ball.rot_mat,
            spin_axis: ball.spin_axis,
            spin_speed: ball.spin_speed,
            phase: ball.phase,
            target: ball.target,
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> IoResult<()> {
        out.write_u64::<LittleEndian>(self.tick)?;
        write_vec3a(out, self.pos)?;
        write_vec3a(out, self.rot_mat.x_axis)?;
        write_vec3a(out, self.rot_mat.y_axis)?;
        write_vec3a(out, self.rot_mat.z_axis)?;
        write_vec3a(out, self.spin_axis)?;
        out.write_f32::<LittleEndian>(self.spin_speed)?;
        out.write_u8(self.phase.to_code())?;
        out.write_u8(self.target.map_or(NO_TARGET, |side| side as u8))?;

        Ok(())
    }

    pub fn read_from_bytes(bytes: &[u8]) -> IoResult<Self> {
        if bytes.len() != BALL_FRAME_SIZE {
            return Err(invalid_data(format!(
                "ball frame must be {BALL_FRAME_SIZE} bytes, got {}",
                bytes.len()
            )));
        }

        let mut bytes = Cursor::new(bytes);
        let tick = bytes.read_u64::<LittleEndian>()?;
        let pos = Vec3A::from_cursor(&mut bytes)?;
        let rot_mat = Mat3A::from_cursor(&mut bytes)?;
        let spin_axis = Vec3A::from_cursor(&mut bytes)?;
        let spin_speed = bytes.read_f32::<LittleEndian>()?;

        let phase_code = bytes.read_u8()?;
        let phase = ShotPhase::try_from(phase_code)
            .map_err(|()| invalid_data(format!("bad shot phase code {phase_code}")))?;

        let target = match bytes.read_u8()? {
            NO_TARGET => None,
            code => Some(
                HoopSide::try_from(code)
                    .map_err(|()| invalid_data(format!("bad hoop code {code}")))?,
            ),
        };

        Ok(Self {
            tick,
            pos,
            rot_mat,
            spin_axis,
            spin_speed,
            phase,
            target,
        })
    }
}
