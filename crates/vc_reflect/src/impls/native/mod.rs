mod native_array;
mod scalar;
