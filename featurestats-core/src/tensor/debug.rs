// src/tensor/debug.rs
use crate::buffer::Buffer;
use crate::tensor::Tensor;
use std::fmt;

const PREVIEW_LEN: usize = 8;

fn preview<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, data: &[T]) -> fmt::Result {
    let shown = &data[..data.len().min(PREVIEW_LEN)];
    write!(f, "{:?}", shown)?;
    if data.len() > PREVIEW_LEN {
        write!(f, "..(+{})", data.len() - PREVIEW_LEN)?;
    }
    Ok(())
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(shape={:?}, dtype={:?}, data=",
            self.shape(),
            self.dtype()
        )?;
        match self.buffer() {
            Buffer::F32(v) => preview(f, v)?,
            Buffer::F64(v) => preview(f, v)?,
            Buffer::I32(v) => preview(f, v)?,
            Buffer::I64(v) => preview(f, v)?,
            Buffer::Str(v) => preview(f, v)?,
        }
        write!(f, ")")
    }
}
