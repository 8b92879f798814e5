use crate::{H128, H160, H256, H512};

macro_rules! impl_std_hash {
    ($name:ident) => {
        impl ::std::hash::Hash for $name {
            #[inline]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write(&self.0[..])
            }
        }
    };
}

impl_std_hash!(H128);
impl_std_hash!(H160);
impl_std_hash!(H256);
impl_std_hash!(H512);
