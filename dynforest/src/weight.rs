//! Edge weight algebras for the weighted engines.
//!
//! The connectivity core is unweighted; these types are used by the link-cut engine and the naive
//! reference engine.

use core::fmt::{Display, Formatter};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops;

use num_traits::{PrimInt, Signed, Unsigned};

use WeightOrInfinity::*;

#[cfg( feature = "generate" )]
use rand::Rng;


/// Group (Z,+), implemented using [i64].
pub type I64SumWeight = SumWeight<i64>;

/// Monoid (N,max), implemented using [u64].
pub type U64MaxWeight = MaxWeight<u64>;

/// Group (bit strings, xor), implemented using [u64].
pub type U64XorWeight = XorWeight<u64>;


/// Base trait for edge weights.
///
/// Edge weights must form a [commutative monoid](https://en.wikipedia.org/wiki/Monoid#Commutative_monoid).
/// The identity element is constructed by [MonoidWeight::identity()]; the monoid operation is
/// addition via the [ops::Add] trait.
pub trait MonoidWeight : Copy + Eq + ops::Add<Self, Output = Self> + Debug + Display {
	/// Returns the identity of this monoid.
	fn identity() -> Self;
}

/// A weight type that also forms a group by allowing negation.
pub trait GroupWeight : MonoidWeight + ops::Neg<Output = Self> + ops::Sub<Self, Output = Self> {}


/// Wrapper around a weight that adds an infinity element.
///
/// Node payloads use infinity for "no such path".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightOrInfinity<TWeight : MonoidWeight> {
	/// Infinity
	Infinite,

	/// A finite value
	Finite( TWeight )
}

impl<TWeight : MonoidWeight> WeightOrInfinity<TWeight> {
	/// Returns this as `TWeight`, if finite. Panics otherwise.
	pub fn unwrap( &self ) -> TWeight {
		match self {
			Infinite => panic!( "Cannot unwrap infinite weight." ),
			Finite( w ) => *w
		}
	}
}

impl<TWeight : MonoidWeight> Display for WeightOrInfinity<TWeight> {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		match self {
			Infinite => write!( f, "∞" ),
			Finite( weight ) => write!( f, "{}", weight )
		}
	}
}

impl<TWeight : MonoidWeight + Ord> Ord for WeightOrInfinity<TWeight> {
	fn cmp( &self, other : &Self ) -> Ordering {
		match ( self, other ) {
			( Finite( s ), Finite( o ) ) => s.cmp( o ),
			( Finite( _ ), Infinite ) => Ordering::Less,
			( Infinite, Finite( _ ) ) => Ordering::Greater,
			( Infinite, Infinite ) => Ordering::Equal
		}
	}
}

impl<TWeight : MonoidWeight + Ord> PartialOrd for WeightOrInfinity<TWeight> {
	fn partial_cmp( &self, other : &Self ) -> Option<Ordering> {
		Some( self.cmp( other ) )
	}
}

impl<TWeight : MonoidWeight> ops::Add<Self> for WeightOrInfinity<TWeight> {
	type Output = Self;

	fn add( self, rhs : Self ) -> Self {
		if let ( Finite( lv ), Finite( rv ) ) = ( self, rhs ) {
			Finite( lv + rv )
		}
		else {
			Infinite
		}
	}
}

impl<TWeight : MonoidWeight> ops::Add<TWeight> for WeightOrInfinity<TWeight> {
	type Output = Self;

	fn add( self, rhs : TWeight ) -> Self {
		match self {
			Infinite => Infinite,
			Finite( w ) => Finite( w + rhs )
		}
	}
}

impl<TWeight : GroupWeight> ops::Sub<TWeight> for WeightOrInfinity<TWeight> {
	type Output = Self;

	fn sub( self, rhs : TWeight ) -> Self {
		match self {
			Infinite => Infinite,
			Finite( w ) => Finite( w - rhs )
		}
	}
}


/// A weight type with only one element, the identity.
///
/// This is useful for connectivity testing in unweighted forests.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct NoWeight {}

impl ops::Add<Self> for NoWeight {
	type Output = NoWeight;

	fn add( self, _ : Self ) -> Self { self }
}

impl ops::Neg for NoWeight {
	type Output = Self;

	fn neg( self ) -> Self { self }
}

impl ops::Sub<Self> for NoWeight {
	type Output = Self;

	fn sub( self, _ : Self ) -> Self { self }
}

impl Display for NoWeight {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "" )
	}
}

impl MonoidWeight for NoWeight {
	fn identity() -> Self {
		NoWeight {}
	}
}

impl GroupWeight for NoWeight {}


/// Weight with signed integer values, where the group operation is addition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	value : TNum
}

impl<TNum> SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	/// Creates a new weight with the given value.
	pub fn new( value : TNum ) -> Self {
		SumWeight { value }
	}

	/// This as `TNum`.
	pub fn value( &self ) -> TNum {
		self.value
	}
}

impl<TNum> ops::Add<Self> for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	type Output = Self;

	fn add( self, rhs : Self ) -> Self {
		Self::new( self.value + rhs.value )
	}
}

impl<TNum> ops::Neg for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	type Output = Self;

	fn neg( self ) -> Self {
		Self::new( -self.value )
	}
}

impl<TNum> ops::Sub<Self> for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	type Output = Self;

	fn sub( self, rhs : Self ) -> Self {
		self + ( -rhs )
	}
}

impl<TNum> Display for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.value )
	}
}

impl<TNum> MonoidWeight for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{
	fn identity() -> Self {
		SumWeight::new( TNum::zero() )
	}
}

impl<TNum> GroupWeight for SumWeight<TNum>
	where TNum : PrimInt + Signed + Debug + Display
{}


/// Weight with unsigned integer values, where the monoid operation is the maximum.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct MaxWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	value : TNum
}

impl<TNum> MaxWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	/// Constructs a new weight with the given value.
	pub fn new( value : TNum ) -> Self {
		MaxWeight { value }
	}

	/// This as `TNum`.
	pub fn value( &self ) -> TNum {
		self.value
	}
}

impl<TNum> ops::Add<Self> for MaxWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	type Output = Self;

	fn add( self, rhs : Self ) -> Self {
		if self.value > rhs.value { self } else { rhs }
	}
}

impl<TNum> Display for MaxWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.value )
	}
}

impl<TNum> MonoidWeight for MaxWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	fn identity() -> Self {
		MaxWeight { value : TNum::zero() }
	}
}


/// Weight with unsigned integer values, where the group operation is bitwise xor.
///
/// Every element is its own inverse.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	value : TNum
}

impl<TNum> XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	/// Constructs a new weight with the given value.
	pub fn new( value : TNum ) -> Self {
		XorWeight { value }
	}

	/// This as `TNum`.
	pub fn value( &self ) -> TNum {
		self.value
	}
}

impl<TNum> ops::Add<Self> for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	type Output = Self;

	fn add( self, rhs : Self ) -> Self {
		Self::new( self.value ^ rhs.value )
	}
}

impl<TNum> ops::Neg for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	type Output = Self;

	fn neg( self ) -> Self { self }
}

impl<TNum> ops::Sub<Self> for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	type Output = Self;

	fn sub( self, rhs : Self ) -> Self {
		self + rhs
	}
}

impl<TNum> Display for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.value )
	}
}

impl<TNum> MonoidWeight for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{
	fn identity() -> Self {
		XorWeight { value : TNum::zero() }
	}
}

impl<TNum> GroupWeight for XorWeight<TNum>
	where TNum : PrimInt + Unsigned + Debug + Display
{}


/// Weight counting the edges of a path; each edge contributes one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct CountWeight {
	count : usize
}

impl CountWeight {
	/// The weight of a single edge.
	pub fn one() -> Self {
		CountWeight { count : 1 }
	}

	/// The number of counted edges.
	pub fn count( &self ) -> usize {
		self.count
	}
}

impl ops::Add<Self> for CountWeight {
	type Output = Self;

	fn add( self, rhs : Self ) -> Self {
		CountWeight { count : self.count + rhs.count }
	}
}

impl Display for CountWeight {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.count )
	}
}

impl MonoidWeight for CountWeight {
	fn identity() -> Self {
		CountWeight { count : 0 }
	}
}


/// A weight type that has a default way of being randomly generated.
#[cfg( feature = "generate" )]
pub trait GeneratableWeight : MonoidWeight {
	/// Generate a weight in the default way.
	fn generate( rng : &mut impl Rng ) -> Self;
}

#[cfg( feature = "generate" )]
impl GeneratableWeight for NoWeight {
	fn generate( _ : &mut impl Rng ) -> NoWeight {
		NoWeight::identity()
	}
}

#[cfg( feature = "generate" )]
impl GeneratableWeight for I64SumWeight {
	fn generate( rng : &mut impl Rng ) -> I64SumWeight {
		SumWeight::new( rng.gen_range( ( -1000 )..1000 ) )
	}
}

#[cfg( feature = "generate" )]
impl GeneratableWeight for U64MaxWeight {
	fn generate( rng : &mut impl Rng ) -> U64MaxWeight {
		MaxWeight::new( rng.gen_range( 0..1000 ) )
	}
}

#[cfg( feature = "generate" )]
impl GeneratableWeight for U64XorWeight {
	fn generate( rng : &mut impl Rng ) -> U64XorWeight {
		XorWeight::new( rng.gen_range( 0..( 1 << 20 ) ) )
	}
}

#[cfg( feature = "generate" )]
impl GeneratableWeight for CountWeight {
	fn generate( _ : &mut impl Rng ) -> CountWeight {
		CountWeight::one()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sum_group_laws() {
		let a = I64SumWeight::new( 5 );
		let b = I64SumWeight::new( -3 );
		assert_eq!( a + I64SumWeight::identity(), a );
		assert_eq!( a + b, I64SumWeight::new( 2 ) );
		assert_eq!( a + ( -a ), I64SumWeight::identity() );
		assert_eq!( a - b, I64SumWeight::new( 8 ) );
	}

	#[test]
	fn test_xor_self_inverse() {
		let a = U64XorWeight::new( 0b1011 );
		assert_eq!( a + a, U64XorWeight::identity() );
		assert_eq!( -a, a );
	}

	#[test]
	fn test_max_monoid() {
		let a = U64MaxWeight::new( 5 );
		let b = U64MaxWeight::new( 9 );
		assert_eq!( a + b, b );
		assert_eq!( b + a, b );
		assert_eq!( a + U64MaxWeight::identity(), a );
	}

	#[test]
	fn test_count() {
		let path = CountWeight::one() + CountWeight::one() + CountWeight::one();
		assert_eq!( path.count(), 3 );
		assert_eq!( CountWeight::identity().count(), 0 );
	}

	#[test]
	fn test_infinity_absorbs() {
		let w : WeightOrInfinity<I64SumWeight> = Finite( I64SumWeight::new( 1 ) );
		assert_eq!( w + Infinite, Infinite );
		assert_eq!( Infinite + w, Infinite );
		assert!( Finite( I64SumWeight::new( 100 ) ) < Infinite );
	}
}
