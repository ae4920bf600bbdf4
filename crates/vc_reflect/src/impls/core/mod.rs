mod opaque;
mod option;
